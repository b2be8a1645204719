use quickstart_utils::{MongoConfig, QuickstartError};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sample {
    ReadDocuments,
    UpdateDocuments,
    DeleteDocuments,
}

impl Sample {
    pub const ALL: [Sample; 3] = [
        Sample::ReadDocuments,
        Sample::UpdateDocuments,
        Sample::DeleteDocuments,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Sample::ReadDocuments => "read-documents",
            Sample::UpdateDocuments => "update-documents",
            Sample::DeleteDocuments => "delete-documents",
        }
    }

    pub fn enabled(&self) -> bool {
        true
    }

    /// Database the sample drops and seeds.
    pub fn database<'a>(&self, config: &'a MongoConfig) -> &'a str {
        match self {
            Sample::ReadDocuments | Sample::DeleteDocuments => &config.persons_database,
            Sample::UpdateDocuments => &config.samples_database,
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sample {
    type Err = QuickstartError;

    /// Accepts `read-documents`, `read_documents`, `ReadDocuments`,
    /// `QuickStart_ReadDocuments` or just `read`, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();
        let normalized = normalized.strip_prefix("quickstart").unwrap_or(&normalized);
        let normalized = normalized.strip_suffix("documents").unwrap_or(normalized);

        match normalized {
            "read" => Ok(Sample::ReadDocuments),
            "update" => Ok(Sample::UpdateDocuments),
            "delete" => Ok(Sample::DeleteDocuments),
            _ => Err(QuickstartError::unknown_sample(s)),
        }
    }
}
