use std::borrow::Cow;

use crate::error::EncodingError;

/// Caller input: either free text or an already tokenized word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Words<'a> {
    /// Split on runs of whitespace before analysis.
    Text(Cow<'a, str>),
    /// Analyzed as given.
    Tokens(Vec<Cow<'a, str>>),
}

impl<'a> Words<'a> {
    /// Decodes free text from raw bytes. Invalid UTF-8 fails; nothing is substituted.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, EncodingError> {
        decode(0, bytes).map(|text| Words::Text(Cow::Borrowed(text)))
    }

    /// Decodes a list of raw byte tokens, failing on the first invalid one.
    pub fn from_byte_tokens<I>(tokens: I) -> Result<Self, EncodingError>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        tokens
            .into_iter()
            .enumerate()
            .map(|(i, bytes)| decode(i, bytes).map(Cow::Borrowed))
            .collect::<Result<Vec<_>, _>>()
            .map(Words::Tokens)
    }

    /// The tokens handed to the engine.
    pub fn into_tokens(self) -> Vec<String> {
        match self {
            Words::Text(text) => text.split_whitespace().map(str::to_string).collect(),
            Words::Tokens(tokens) => tokens.into_iter().map(Cow::into_owned).collect(),
        }
    }
}

fn decode(token: usize, bytes: &[u8]) -> Result<&str, EncodingError> {
    std::str::from_utf8(bytes).map_err(|e| EncodingError {
        token,
        valid_up_to: e.valid_up_to(),
    })
}

impl<'a> From<&'a str> for Words<'a> {
    fn from(text: &'a str) -> Self {
        Words::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Words<'a> {
    fn from(text: &'a String) -> Self {
        Words::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for Words<'static> {
    fn from(text: String) -> Self {
        Words::Text(Cow::Owned(text))
    }
}

impl<'a> From<&'a [&'a str]> for Words<'a> {
    fn from(tokens: &'a [&'a str]) -> Self {
        Words::Tokens(tokens.iter().map(|t| Cow::Borrowed(*t)).collect())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for Words<'a> {
    fn from(tokens: [&'a str; N]) -> Self {
        Words::Tokens(tokens.into_iter().map(Cow::Borrowed).collect())
    }
}

impl<'a> From<Vec<&'a str>> for Words<'a> {
    fn from(tokens: Vec<&'a str>) -> Self {
        Words::Tokens(tokens.into_iter().map(Cow::Borrowed).collect())
    }
}

impl From<Vec<String>> for Words<'static> {
    fn from(tokens: Vec<String>) -> Self {
        Words::Tokens(tokens.into_iter().map(Cow::Owned).collect())
    }
}
