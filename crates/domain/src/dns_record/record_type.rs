use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;

/// Sentinel accepted in the `type` field meaning "use the resolver's default type".
pub const DEFAULT_TYPE_SENTINEL: &str = "NONE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    TXT,
    PTR,

    SRV,
    SOA,
    NS,
    NAPTR,
    DS,
    DNSKEY,
    SVCB,
    HTTPS,

    CAA,
    TLSA,
    SSHFP,

    RRSIG,
    NSEC,
    NSEC3,
    NSEC3PARAM,

    CDS,
    CDNSKEY,

    ANY,

    /// Any other type, by wire number. Never holds a number listed above.
    Other(u16),
}

/// Mnemonics without a dedicated variant (IANA DNS parameters registry).
const OTHER_MNEMONICS: [(&str, u16); 20] = [
    ("NULL", 10),
    ("WKS", 11),
    ("HINFO", 13),
    ("MINFO", 14),
    ("RP", 17),
    ("AFSDB", 18),
    ("KEY", 25),
    ("LOC", 29),
    ("KX", 36),
    ("CERT", 37),
    ("DNAME", 39),
    ("APL", 42),
    ("IPSECKEY", 45),
    ("DHCID", 49),
    ("HIP", 55),
    ("OPENPGPKEY", 61),
    ("CSYNC", 62),
    ("ZONEMD", 63),
    ("SPF", 99),
    ("URI", 256),
];

const NAMED: [RecordType; 24] = [
    RecordType::A,
    RecordType::AAAA,
    RecordType::CNAME,
    RecordType::MX,
    RecordType::TXT,
    RecordType::PTR,
    RecordType::SRV,
    RecordType::SOA,
    RecordType::NS,
    RecordType::NAPTR,
    RecordType::DS,
    RecordType::DNSKEY,
    RecordType::SVCB,
    RecordType::HTTPS,
    RecordType::CAA,
    RecordType::TLSA,
    RecordType::SSHFP,
    RecordType::RRSIG,
    RecordType::NSEC,
    RecordType::NSEC3,
    RecordType::NSEC3PARAM,
    RecordType::CDS,
    RecordType::CDNSKEY,
    RecordType::ANY,
];

impl RecordType {
    /// The registered mnemonic, if the type has one.
    pub fn mnemonic(&self) -> Option<&'static str> {
        let name = match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
            RecordType::PTR => "PTR",
            RecordType::SRV => "SRV",
            RecordType::SOA => "SOA",
            RecordType::NS => "NS",
            RecordType::NAPTR => "NAPTR",
            RecordType::DS => "DS",
            RecordType::DNSKEY => "DNSKEY",
            RecordType::SVCB => "SVCB",
            RecordType::HTTPS => "HTTPS",
            RecordType::CAA => "CAA",
            RecordType::TLSA => "TLSA",
            RecordType::SSHFP => "SSHFP",
            RecordType::RRSIG => "RRSIG",
            RecordType::NSEC => "NSEC",
            RecordType::NSEC3 => "NSEC3",
            RecordType::NSEC3PARAM => "NSEC3PARAM",
            RecordType::CDS => "CDS",
            RecordType::CDNSKEY => "CDNSKEY",
            RecordType::ANY => "ANY",
            RecordType::Other(code) => {
                return OTHER_MNEMONICS
                    .iter()
                    .find(|(_, c)| c == code)
                    .map(|(name, _)| *name)
            }
        };
        Some(name)
    }

    /// Maps a wire number back to its variant; unlisted numbers become `Other`.
    pub fn from_u16(code: u16) -> Self {
        NAMED
            .into_iter()
            .find(|rt| rt.to_u16() == code)
            .unwrap_or(RecordType::Other(code))
    }

    /// Wire format number (RFC 1035 §3.2.2 and successors).
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::PTR => 12,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
            RecordType::SRV => 33,
            RecordType::NAPTR => 35,
            RecordType::DS => 43,
            RecordType::SSHFP => 44,
            RecordType::RRSIG => 46,
            RecordType::NSEC => 47,
            RecordType::DNSKEY => 48,
            RecordType::NSEC3 => 50,
            RecordType::NSEC3PARAM => 51,
            RecordType::TLSA => 52,
            RecordType::CDS => 59,
            RecordType::CDNSKEY => 60,
            RecordType::SVCB => 64,
            RecordType::HTTPS => 65,
            RecordType::ANY => 255,
            RecordType::CAA => 257,
            RecordType::Other(code) => *code,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mnemonic() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "TYPE{}", self.to_u16()),
        }
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "CNAME" => Ok(RecordType::CNAME),
            "MX" => Ok(RecordType::MX),
            "TXT" => Ok(RecordType::TXT),
            "PTR" => Ok(RecordType::PTR),
            "SRV" => Ok(RecordType::SRV),
            "SOA" => Ok(RecordType::SOA),
            "NS" => Ok(RecordType::NS),
            "NAPTR" => Ok(RecordType::NAPTR),
            "DS" => Ok(RecordType::DS),
            "DNSKEY" => Ok(RecordType::DNSKEY),
            "SVCB" => Ok(RecordType::SVCB),
            "HTTPS" => Ok(RecordType::HTTPS),
            "CAA" => Ok(RecordType::CAA),
            "TLSA" => Ok(RecordType::TLSA),
            "SSHFP" => Ok(RecordType::SSHFP),
            "RRSIG" => Ok(RecordType::RRSIG),
            "NSEC" => Ok(RecordType::NSEC),
            "NSEC3" => Ok(RecordType::NSEC3),
            "NSEC3PARAM" => Ok(RecordType::NSEC3PARAM),
            "CDS" => Ok(RecordType::CDS),
            "CDNSKEY" => Ok(RecordType::CDNSKEY),
            "ANY" => Ok(RecordType::ANY),
            other => {
                if let Some((_, code)) = OTHER_MNEMONICS.iter().find(|(name, _)| *name == other) {
                    return Ok(RecordType::Other(*code));
                }
                // Generic form, RFC 3597 §5.
                other
                    .strip_prefix("TYPE")
                    .and_then(|digits| digits.parse::<u16>().ok())
                    .map(RecordType::from_u16)
                    .ok_or_else(|| DomainError::InvalidRecordType(s.to_string()))
            }
        }
    }
}

/// The `type` field of a lookup request, before it is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestedType {
    Default,
    Explicit(String),
}

impl RequestedType {
    pub fn from_request(raw: &str) -> Self {
        if raw == DEFAULT_TYPE_SENTINEL {
            RequestedType::Default
        } else {
            RequestedType::Explicit(raw.to_string())
        }
    }

    /// Resolves to a concrete type. The default is `A`, as with a stub resolver.
    pub fn record_type(&self) -> Result<RecordType, DomainError> {
        match self {
            RequestedType::Default => Ok(RecordType::A),
            RequestedType::Explicit(name) => name.parse(),
        }
    }
}
