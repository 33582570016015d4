use std::fmt;

/// Response code carried in the low four bits of the header flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rcode {
    NoError,
    FormatError,
    ServerFailure,
    NameError,
    NotImplemented,
    Refused,
    Unknown(u8),
}

impl Rcode {
    pub fn from_u8(code: u8) -> Self {
        match code & 0x0F {
            0 => Rcode::NoError,
            1 => Rcode::FormatError,
            2 => Rcode::ServerFailure,
            3 => Rcode::NameError,
            4 => Rcode::NotImplemented,
            5 => Rcode::Refused,
            other => Rcode::Unknown(other),
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            Rcode::NoError => 0,
            Rcode::FormatError => 1,
            Rcode::ServerFailure => 2,
            Rcode::NameError => 3,
            Rcode::NotImplemented => 4,
            Rcode::Refused => 5,
            Rcode::Unknown(code) => code,
        }
    }

    /// Codes that end the exchange with an error, whatever the other flags say.
    pub fn is_fatal(self) -> bool {
        matches!(
            self,
            Rcode::FormatError | Rcode::ServerFailure | Rcode::NotImplemented | Rcode::Refused
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rcode::NoError => "NOERROR",
            Rcode::FormatError => "FORMERR",
            Rcode::ServerFailure => "SERVFAIL",
            Rcode::NameError => "NXDOMAIN",
            Rcode::NotImplemented => "NOTIMP",
            Rcode::Refused => "REFUSED",
            Rcode::Unknown(_) => "UNKNOWN",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Rcode::NoError => "No error condition",
            Rcode::FormatError => {
                "Format error: the name server was unable to interpret the query"
            }
            Rcode::ServerFailure => {
                "Server failure: the name server was unable to process this query due to a problem with the name server"
            }
            Rcode::NameError => {
                "Name error: the domain name referenced in the query does not exist"
            }
            Rcode::NotImplemented => {
                "Not implemented: the name server does not support the requested kind of query"
            }
            Rcode::Refused => {
                "Refused: the name server refuses to perform the requested operation for policy reasons"
            }
            Rcode::Unknown(_) => "RCODE value is not within the range [0,5]",
        }
    }
}

impl fmt::Display for Rcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rcode::Unknown(code) => write!(f, "UNKNOWN({})", code),
            other => f.write_str(other.as_str()),
        }
    }
}
