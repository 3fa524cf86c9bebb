use std::fmt;

use thiserror::Error;

/// Which generated file an encoder was producing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    CrioWorkloads,
    KubeletPinning,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artifact::CrioWorkloads => f.write_str("CRI-O workload drop-in"),
            Artifact::KubeletPinning => f.write_str("kubelet workload pinning"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DropinError {
    #[error("could not encode {artifact}: {source}")]
    Serialize {
        artifact: Artifact,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl DropinError {
    pub(crate) fn serialize(
        artifact: Artifact,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        DropinError::Serialize { artifact, source: source.into() }
    }

    pub fn artifact(&self) -> Artifact {
        match self {
            DropinError::Serialize { artifact, .. } => *artifact,
        }
    }
}
