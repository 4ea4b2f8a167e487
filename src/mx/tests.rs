use std::collections::HashMap;

use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};

use super::{DomainLookup, DomainStatus, MxAnswer, MxError, MxRecord, check_deliverability, resolver};

/// In-memory DNS: unknown names answer NXDOMAIN.
#[derive(Clone, Default)]
pub(crate) struct StubResolver {
    mx: HashMap<String, MxAnswer>,
    addresses: HashMap<String, bool>,
    failing: Vec<String>,
    slow: Vec<String>,
    slow_addresses: Vec<String>,
}

impl StubResolver {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_mx(mut self, domain: &str, records: Vec<MxRecord>) -> Self {
        self.mx.insert(domain.to_string(), MxAnswer::Records(records));
        self
    }

    pub(crate) fn with_address_only(mut self, domain: &str) -> Self {
        self.mx.insert(domain.to_string(), MxAnswer::NoRecords);
        self.addresses.insert(domain.to_string(), true);
        self
    }

    pub(crate) fn with_nothing(mut self, domain: &str) -> Self {
        self.mx.insert(domain.to_string(), MxAnswer::NoRecords);
        self
    }

    pub(crate) fn failing(mut self, domain: &str) -> Self {
        self.failing.push(domain.to_string());
        self
    }

    /// Every query for `domain` times out.
    pub(crate) fn timing_out(mut self, domain: &str) -> Self {
        self.slow.push(domain.to_string());
        self
    }

    /// No MX, and the A/AAAA query times out.
    pub(crate) fn address_timing_out(mut self, domain: &str) -> Self {
        self.mx.insert(domain.to_string(), MxAnswer::NoRecords);
        self.slow_addresses.push(domain.to_string());
        self
    }
}

fn timeout() -> ResolveError {
    ResolveErrorKind::Timeout.into()
}

impl DomainLookup for StubResolver {
    fn lookup_mx(&self, domain: &str) -> Result<MxAnswer, ResolveError> {
        if self.failing.iter().any(|d| d == domain) {
            return Err(ResolveError::from("connection refused"));
        }
        if self.slow.iter().any(|d| d == domain) {
            return Err(timeout());
        }
        Ok(self.mx.get(domain).cloned().unwrap_or(MxAnswer::NxDomain))
    }

    fn has_address(&self, domain: &str) -> Result<bool, ResolveError> {
        if self.slow_addresses.iter().any(|d| d == domain) {
            return Err(timeout());
        }
        Ok(self.addresses.get(domain).copied().unwrap_or(false))
    }
}

#[test]
fn records_are_sorted_and_deduped() {
    let stub = StubResolver::new().with_mx(
        "example.com",
        vec![
            MxRecord::new(20, "mx2.example.com"),
            MxRecord::new(10, "mx1.example.com"),
            MxRecord::new(10, "mx1.example.com"),
            MxRecord::new(30, "mx3.example.com"),
        ],
    );

    let status = check_deliverability(&stub, "example.com").expect("lookup succeeds");
    let records = status.records();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0], MxRecord::new(10, "mx1.example.com"));
    assert_eq!(records[2].preference, 30);
    assert!(status.accepts_mail());
}

#[test]
fn nxdomain_is_not_found() {
    let stub = StubResolver::new();
    let status = check_deliverability(&stub, "nope.example").expect("lookup succeeds");
    assert_eq!(status, DomainStatus::NotFound);
    assert_eq!(
        status.rejection("nope.example").as_deref(),
        Some("The domain name nope.example does not exist.")
    );
}

#[test]
fn null_mx_refuses_mail() {
    let stub = StubResolver::new().with_mx("nomail.example", vec![MxRecord::new(0, "")]);
    let status = check_deliverability(&stub, "nomail.example").expect("lookup succeeds");
    assert_eq!(status, DomainStatus::NullMx);
    assert!(!status.accepts_mail());
}

#[test]
fn falls_back_to_address_records() {
    let stub = StubResolver::new()
        .with_address_only("a-only.example")
        .with_nothing("bare.example");

    let status = check_deliverability(&stub, "a-only.example").expect("lookup succeeds");
    assert_eq!(status, DomainStatus::ImplicitMx);

    let status = check_deliverability(&stub, "bare.example").expect("lookup succeeds");
    assert_eq!(status, DomainStatus::NoMailServer);
    assert!(status.rejection("bare.example").expect("rejected").contains("does not accept email"));
}

#[test]
fn lookup_failure_is_an_error() {
    let stub = StubResolver::new().failing("broken.example");
    let err = check_deliverability(&stub, "broken.example").expect_err("refused");
    assert!(matches!(err, MxError::Lookup { .. }));
    assert!(err.to_string().starts_with("DNS lookup failed"));
}

#[test]
fn timeouts_leave_deliverability_unknown() {
    let stub = StubResolver::new()
        .timing_out("slow.example")
        .address_timing_out("slow-a.example");

    for domain in ["slow.example", "slow-a.example"] {
        let status = check_deliverability(&stub, domain).expect("timeout is not an error");
        assert_eq!(status, DomainStatus::Unknown);
        assert!(status.accepts_mail());
        assert_eq!(status.rejection(domain), None);
    }
}

#[test]
fn normalize_exchange_trims_dot_and_lowercases() {
    let out = resolver::normalize_exchange("Mail.EXAMPLE.com.".to_string());
    assert_eq!(out, "mail.example.com");
}
