//! Channel coding reference table.
//!
//! Each scheme carries its code rate (information bits per transmitted bit)
//! and the Eb/N0 it needs for a bit-error rate of 10⁻⁶. Concatenated schemes
//! multiply the rates of their inner and outer codes; Reed–Solomon here is
//! the CCSDS (255,223) code.

use crate::{LinkError, LinkResult};
use std::fmt;
use std::str::FromStr;

const RS_RATE: f64 = 223.0 / 255.0;

/// Modulation/coding scheme identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Coding {
    #[default]
    Uncoded,
    ReedSolomon,
    ConvolutionalHalf,
    ConvolutionalRsHalf,
    ConvolutionalRsSixth,
    TurboHalf,
    TurboSixth,
    LdpcThreeQuarters,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodingScheme {
    pub name: &'static str,
    /// Short, space-free name accepted on command lines.
    pub alias: &'static str,
    /// Information bits per channel bit, in (0, 1].
    pub code_rate: f64,
    /// Required energy per bit to noise density (dB).
    pub required_eb_no: f64,
}

const CATALOG: [CodingScheme; 8] = [
    CodingScheme {
        name: "Uncoded",
        alias: "uncoded",
        code_rate: 1.0,
        required_eb_no: 10.5,
    },
    CodingScheme {
        name: "Reed-Solomon (only)",
        alias: "rs",
        code_rate: RS_RATE,
        required_eb_no: 6.4,
    },
    CodingScheme {
        name: "Convolutional: r=1/2",
        alias: "conv-1/2",
        code_rate: 0.5,
        required_eb_no: 5.0,
    },
    CodingScheme {
        name: "Convolutional-RS: r=1/2",
        alias: "conv-rs-1/2",
        code_rate: 0.5 * RS_RATE,
        required_eb_no: 2.5,
    },
    CodingScheme {
        name: "Convolutional-RS: r=1/6",
        alias: "conv-rs-1/6",
        code_rate: RS_RATE / 6.0,
        required_eb_no: 1.6,
    },
    CodingScheme {
        name: "Turbo-Codes: r=1/2",
        alias: "turbo-1/2",
        code_rate: 0.5,
        required_eb_no: 1.0,
    },
    CodingScheme {
        name: "Turbo-Codes: r=1/6",
        alias: "turbo-1/6",
        code_rate: 1.0 / 6.0,
        required_eb_no: -0.1,
    },
    CodingScheme {
        name: "LDPC: r=3/4",
        alias: "ldpc-3/4",
        code_rate: 0.75,
        required_eb_no: 2.5,
    },
];

impl Coding {
    pub const ALL: [Coding; 8] = [
        Coding::Uncoded,
        Coding::ReedSolomon,
        Coding::ConvolutionalHalf,
        Coding::ConvolutionalRsHalf,
        Coding::ConvolutionalRsSixth,
        Coding::TurboHalf,
        Coding::TurboSixth,
        Coding::LdpcThreeQuarters,
    ];

    pub fn scheme(&self) -> &'static CodingScheme {
        &CATALOG[*self as usize]
    }

    pub fn name(&self) -> &'static str {
        self.scheme().name
    }

    pub fn code_rate(&self) -> f64 {
        self.scheme().code_rate
    }

    pub fn required_eb_no(&self) -> f64 {
        self.scheme().required_eb_no
    }

    /// Looks a scheme up by display name or alias, ignoring case and
    /// surrounding whitespace.
    pub fn lookup(name: &str) -> LinkResult<Coding> {
        let key = name.trim();
        Coding::ALL
            .iter()
            .copied()
            .find(|c| {
                let s = c.scheme();
                s.name.eq_ignore_ascii_case(key) || s.alias.eq_ignore_ascii_case(key)
            })
            .ok_or_else(|| LinkError::unknown_key("coding scheme", key))
    }
}

impl fmt::Display for Coding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Coding {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coding::lookup(s)
    }
}

impl TryFrom<String> for Coding {
    type Error = LinkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Coding::lookup(&value)
    }
}

impl From<Coding> for String {
    fn from(coding: Coding) -> Self {
        coding.name().to_string()
    }
}
