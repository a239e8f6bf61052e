type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CodecError {
    #[error("{format} encoding failed: {source}")]
    Encoding {
        format: &'static str,
        #[source]
        source: BoxedSource,
    },

    #[error("{format} decoding failed: {source}")]
    Decoding {
        format: &'static str,
        #[source]
        source: BoxedSource,
    },
}

impl CodecError {
    pub fn encoding(format: &'static str, source: impl Into<BoxedSource>) -> Self {
        Self::Encoding {
            format,
            source: source.into(),
        }
    }

    pub fn decoding(format: &'static str, source: impl Into<BoxedSource>) -> Self {
        Self::Decoding {
            format,
            source: source.into(),
        }
    }

    #[must_use]
    pub const fn format(&self) -> &'static str {
        match self {
            Self::Encoding { format, .. } | Self::Decoding { format, .. } => *format,
        }
    }

    #[must_use]
    pub const fn is_decoding(&self) -> bool {
        matches!(self, Self::Decoding { .. })
    }
}
