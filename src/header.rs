//! Fixed-layout header fields backed by a parsed [`Format`].

use bytes::Bytes;

use crate::error::PackError;
use crate::format::{Endianness, Format};
use crate::types::Value;

/// A header layout, validated once and reused for every pack/unpack.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    format: Format,
}

impl Header {
    /// Builds a little-endian header from token spellings.
    pub fn new<S: AsRef<str>>(tokens: &[S]) -> Result<Self, PackError> {
        Self::builder().tokens(tokens).build()
    }

    /// Creates a header builder.
    pub fn builder() -> HeaderBuilder {
        HeaderBuilder::default()
    }

    pub fn format(&self) -> &Format {
        &self.format
    }

    /// Size of the packed header in bytes.
    pub fn size(&self) -> usize {
        self.format.size()
    }

    /// Packs header field values.
    pub fn pack(&self, fields: &[Value]) -> Result<Bytes, PackError> {
        let header = self.format.pack(fields)?;
        tracing::trace!(size = header.len(), "header packed");
        Ok(header)
    }

    /// Unpacks header field values from the front of `header`.
    pub fn unpack(&self, header: &[u8]) -> Result<Vec<Value>, PackError> {
        let fields = self.format.unpack(header)?;
        tracing::trace!(fields = fields.len(), "header unpacked");
        Ok(fields)
    }
}

/// Builder for a [`Header`] layout.
#[derive(Debug, Clone, Default)]
pub struct HeaderBuilder {
    tokens: Vec<String>,
    byte_order: Endianness,
}

impl HeaderBuilder {
    /// Appends one token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.tokens.push(token.into());
        self
    }

    /// Appends several tokens in order.
    pub fn tokens<S: AsRef<str>>(mut self, tokens: &[S]) -> Self {
        self.tokens.extend(tokens.iter().map(|t| t.as_ref().to_string()));
        self
    }

    /// Sets the byte order used until the first marker token.
    pub fn byte_order(mut self, order: Endianness) -> Self {
        self.byte_order = order;
        self
    }

    /// Parses the collected tokens.
    pub fn build(self) -> Result<Header, PackError> {
        let format = Format::parse(&self.tokens)?.with_byte_order(self.byte_order);
        tracing::debug!(
            tokens = format.tokens().len(),
            size = format.size(),
            byte_order = ?format.byte_order(),
            "header layout built"
        );
        Ok(Header { format })
    }
}
