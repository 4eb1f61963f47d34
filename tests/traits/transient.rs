use std::io::{Error as IoError, ErrorKind};
use std::time::Duration;

use error_taxon::common::{ILLEGAL_STATE, TEMPORARY, TIMEOUT_ELAPSED};
use error_taxon::traits::RETRY_AFTER_MS;
use error_taxon::{decorate, Namespace, TransientError, TransientErrorExt};

#[test]
fn class_traits_drive_transient_classification() {
    assert!(TIMEOUT_ELAPSED.error("deadline passed").is_transient());
    assert!(ILLEGAL_STATE.error("closed").is_permanent());

    let busy = Namespace::new("transient_it", &[TEMPORARY.clone()]).class("busy", &[]);
    assert!(decorate(busy.error("try again"), "calling backend").is_transient());
}

#[test]
fn retry_hint_reads_milliseconds_property() {
    let err = TIMEOUT_ELAPSED.error("slow").with(RETRY_AFTER_MS, 250u64);
    assert_eq!(err.retry_after_hint(), Some(Duration::from_millis(250)));
    assert_eq!(TIMEOUT_ELAPSED.error("slow").retry_after_hint(), None);
}

#[test]
fn io_errors_classify_by_kind() {
    assert!(IoError::from(ErrorKind::TimedOut).is_transient());
    assert!(IoError::from(ErrorKind::ConnectionReset).is_transient());
    assert!(IoError::from(ErrorKind::NotFound).is_permanent());
}

#[test]
fn retry_if_transient_filters_permanent_errors() {
    let transient: Result<(), _> = Err(TIMEOUT_ELAPSED.error("again"));
    let permanent: Result<(), _> = Err(ILLEGAL_STATE.error("never"));
    let ok: Result<u8, IoError> = Ok(1);

    assert!(transient.retry_if_transient().is_some());
    assert!(permanent.retry_if_transient().is_none());
    assert!(ok.retry_if_transient().is_none());
}
