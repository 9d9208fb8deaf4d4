//! Interface de linha de comando da montagem baseada em clap.
//!
//! Define a struct [`Cli`] com subcomandos [`Command`] (assemble, validate,
//! clear, sample) e flags globais (--variant, --no-interview, --verbose).

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::allocator::Variant;

/// Montagem das salas: distribui os trabalhadores presentes entre as salas.
#[derive(Debug, Parser)]
#[command(name = "montagem", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Regras de montagem a usar nesta execução.
    #[arg(long, global = true)]
    pub variant: Option<VariantArg>,

    /// Não trata salas de entrevista como fase própria.
    #[arg(long, global = true, default_value_t = false)]
    pub no_interview: bool,

    /// Habilita saída detalhada (verbose).
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

/// Argumento de variante aceito pela CLI, mapeado para [`Variant`] internamente.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum VariantArg {
    /// Respeita a capacidade de todas as salas; sobras ficam sem sala.
    Strict,
    /// Ninguém presente fica sem sala; salas de passe podem exceder a capacidade.
    Exhaustive,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Strict => Variant::Strict,
            VariantArg::Exhaustive => Variant::Exhaustive,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Gera a montagem das salas a partir de um arquivo de escala.
    Assemble {
        /// Caminho do arquivo JSON exportado (workers + rooms).
        file: PathBuf,

        /// Imprime a lista de atribuições em JSON em vez do relatório.
        #[arg(long)]
        json: bool,

        /// Grava as atribuições de volta no arquivo.
        #[arg(long)]
        write: bool,
    },

    /// Valida um arquivo de escala sem gerar a montagem.
    Validate {
        file: PathBuf,
    },

    /// Remove todas as atribuições de sala do arquivo.
    Clear {
        file: PathBuf,
    },

    /// Imprime uma escala de exemplo em JSON.
    Sample,
}
