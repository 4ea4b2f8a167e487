#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MxRecord {
    pub preference: u16,
    pub exchange: String,
}

impl MxRecord {
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }

    /// RFC 7505 "null MX": preference 0 and the root as exchange.
    pub fn is_null(&self) -> bool {
        self.preference == 0 && self.exchange.is_empty()
    }
}

/// Raw answer to an MX query, before any mail-policy interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MxAnswer {
    Records(Vec<MxRecord>),
    NoRecords,
    /// The name itself does not exist (NXDOMAIN).
    NxDomain,
}

/// What DNS says about a domain's ability to receive mail.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainStatus {
    /// MX hosts, ascending preference.
    Mail(Vec<MxRecord>),
    /// No MX, but the domain has A/AAAA records (implicit MX).
    ImplicitMx,
    NullMx,
    NoMailServer,
    NotFound,
    /// A query timed out; deliverability is unknown and the address is given
    /// the benefit of the doubt.
    Unknown,
}

impl DomainStatus {
    pub fn accepts_mail(&self) -> bool {
        matches!(self, Self::Mail(_) | Self::ImplicitMx | Self::Unknown)
    }

    /// Human-readable rejection for `domain`, `None` when mail is accepted.
    pub fn rejection(&self, domain: &str) -> Option<String> {
        match self {
            Self::Mail(_) | Self::ImplicitMx | Self::Unknown => None,
            Self::NotFound => Some(format!("The domain name {domain} does not exist.")),
            Self::NullMx | Self::NoMailServer => {
                Some(format!("The domain name {domain} does not accept email."))
            }
        }
    }

    pub fn records(&self) -> &[MxRecord] {
        match self {
            Self::Mail(records) => records.as_slice(),
            _ => &[],
        }
    }
}
