//! Configuração da montagem carregada a partir de `montagem.toml`.
//!
//! A struct [`MontagemConfig`] contém todos os parâmetros configuráveis.
//! Valores não presentes no arquivo usam defaults sensíveis.
//! A variável de ambiente `MONTAGEM_VARIANT` tem precedência sobre o arquivo.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;

use crate::allocator::{AllocationPolicy, Variant};
use crate::eligibility::NameRules;

/// Configuração de nível superior carregada de `montagem.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct MontagemConfig {
    /// Regras de montagem: `exhaustive` (padrão) ou `strict`.
    #[serde(default)]
    pub variant: Variant,

    /// Preenche as salas de entrevista antes da recepção.
    #[serde(default = "default_interview_phase")]
    pub interview_phase: bool,

    /// Trechos de nome que identificam salas de recepção sem marcação explícita.
    #[serde(default = "default_reception_fragments")]
    pub reception_fragments: Vec<String>,

    /// Trechos de nome que identificam salas de entrevista sem marcação explícita.
    #[serde(default = "default_interview_fragments")]
    pub interview_fragments: Vec<String>,

    /// Trecho de nome que marca uma sala como de passe.
    #[serde(default = "default_passe_fragment")]
    pub passe_fragment: String,

    /// Filtro de log usado quando `RUST_LOG` não está definido.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_interview_phase() -> bool {
    true
}

fn default_reception_fragments() -> Vec<String> {
    NameRules::default().reception
}

fn default_interview_fragments() -> Vec<String> {
    NameRules::default().interview
}

fn default_passe_fragment() -> String {
    NameRules::default().passe
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for MontagemConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            interview_phase: default_interview_phase(),
            reception_fragments: default_reception_fragments(),
            interview_fragments: default_interview_fragments(),
            passe_fragment: default_passe_fragment(),
            log_level: default_log_level(),
        }
    }
}

impl MontagemConfig {
    /// Carrega a configuração de `montagem.toml` no diretório atual.
    /// Usa valores padrão se o arquivo não existir.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("montagem.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            toml::from_str::<MontagemConfig>(&contents)
                .with_context(|| format!("invalid config in {}", path.display()))?
        } else {
            Self::default()
        };

        if let Ok(value) = std::env::var("MONTAGEM_VARIANT")
            && !value.is_empty()
        {
            config.variant = parse_variant(&value)?;
        }

        Ok(config)
    }

    pub fn policy(&self) -> AllocationPolicy {
        AllocationPolicy {
            variant: self.variant,
            interview_phase: self.interview_phase,
            rules: NameRules {
                reception: self.reception_fragments.clone(),
                interview: self.interview_fragments.clone(),
                passe: self.passe_fragment.clone(),
            },
        }
    }
}

fn parse_variant(value: &str) -> Result<Variant> {
    match value.trim().to_lowercase().as_str() {
        "strict" => Ok(Variant::Strict),
        "exhaustive" => Ok(Variant::Exhaustive),
        other => bail!("MONTAGEM_VARIANT must be `strict` or `exhaustive`, got `{other}`"),
    }
}
