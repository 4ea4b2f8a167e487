use std::time::Duration;

use tracing::{debug, warn};
use trust_dns_resolver::{
    Resolver,
    error::{ResolveError, ResolveErrorKind},
    proto::op::ResponseCode,
    system_conf::read_system_conf,
};

use super::{DomainStatus, Error, MxAnswer, MxRecord};

/// DNS queries needed for a deliverability decision.
///
/// Implemented for the blocking system [`Resolver`]; tests plug in a stub.
pub trait DomainLookup {
    fn lookup_mx(&self, domain: &str) -> Result<MxAnswer, ResolveError>;
    /// Whether the name has at least one A or AAAA record.
    fn has_address(&self, domain: &str) -> Result<bool, ResolveError>;
}

/// Builds a blocking resolver from the system configuration.
///
/// The sync resolver serialises queries behind an internal lock, so callers
/// running lookups in parallel should build one per thread.
pub fn build_resolver(timeout: Option<Duration>) -> Result<Resolver, Error> {
    let (config, mut opts) = read_system_conf().map_err(Error::resolver_init)?;
    if let Some(timeout) = timeout {
        opts.timeout = timeout;
    }
    Resolver::new(config, opts).map_err(Error::resolver_init)
}

/// Decides whether `ascii_domain` can receive mail: MX records first, then
/// the A/AAAA fallback (implicit MX).
///
/// A timed-out query yields [`DomainStatus::Unknown`]; any other resolver
/// failure is an error.
pub fn check_deliverability<R>(resolver: &R, ascii_domain: &str) -> Result<DomainStatus, Error>
where
    R: DomainLookup + ?Sized,
{
    let answer = match resolver.lookup_mx(ascii_domain) {
        Ok(answer) => answer,
        Err(err) if is_timeout(&err) => return Ok(timed_out(ascii_domain, &err)),
        Err(err) => return Err(Error::lookup(err)),
    };

    let mut records = match answer {
        MxAnswer::NxDomain => return Ok(DomainStatus::NotFound),
        MxAnswer::Records(records) => records,
        MxAnswer::NoRecords => Vec::new(),
    };
    records.sort();
    records.dedup();

    if !records.is_empty() {
        if records.iter().all(MxRecord::is_null) {
            return Ok(DomainStatus::NullMx);
        }
        records.retain(|r| !r.is_null());
        return Ok(DomainStatus::Mail(records));
    }

    debug!(domain = ascii_domain, "no MX records, trying A/AAAA");
    match resolver.has_address(ascii_domain) {
        Ok(true) => Ok(DomainStatus::ImplicitMx),
        Ok(false) => Ok(DomainStatus::NoMailServer),
        Err(err) if is_timeout(&err) => Ok(timed_out(ascii_domain, &err)),
        Err(err) => Err(Error::lookup(err)),
    }
}

fn is_timeout(err: &ResolveError) -> bool {
    matches!(err.kind(), ResolveErrorKind::Timeout)
}

fn timed_out(domain: &str, err: &ResolveError) -> DomainStatus {
    warn!(domain, %err, "DNS query timed out, deliverability unknown");
    DomainStatus::Unknown
}

pub(crate) fn normalize_exchange(exchange: String) -> String {
    let trimmed = exchange.trim_end_matches('.');
    trimmed.to_ascii_lowercase()
}

// Absolute name so the resolver's search list never applies.
fn absolute(domain: &str) -> String {
    format!("{}.", domain.trim_end_matches('.'))
}

// `Some(true)` for NXDOMAIN, `Some(false)` for NOERROR with no data.
fn empty_answer_kind(err: &ResolveError) -> Option<bool> {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            Some(*response_code == ResponseCode::NXDomain)
        }
        _ => None,
    }
}

impl DomainLookup for Resolver {
    fn lookup_mx(&self, domain: &str) -> Result<MxAnswer, ResolveError> {
        let lookup = match Resolver::mx_lookup(self, absolute(domain).as_str()) {
            Ok(lookup) => lookup,
            Err(err) => {
                return match empty_answer_kind(&err) {
                    Some(true) => Ok(MxAnswer::NxDomain),
                    Some(false) => Ok(MxAnswer::NoRecords),
                    None => Err(err),
                };
            }
        };

        let records: Vec<MxRecord> = lookup
            .iter()
            .map(|mx| MxRecord::new(mx.preference(), normalize_exchange(mx.exchange().to_utf8())))
            .collect();
        if records.is_empty() {
            Ok(MxAnswer::NoRecords)
        } else {
            Ok(MxAnswer::Records(records))
        }
    }

    fn has_address(&self, domain: &str) -> Result<bool, ResolveError> {
        match Resolver::lookup_ip(self, absolute(domain).as_str()) {
            Ok(lookup) => Ok(lookup.iter().next().is_some()),
            Err(err) if empty_answer_kind(&err).is_some() => Ok(false),
            Err(err) => Err(err),
        }
    }
}
