//! Drives the C exports end to end against a mock provider.
//!
//! The exports read their configuration once per process, so this file
//! holds a single test that sets the environment before the first call.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use stockprice::{getPrice, stockprice_free_string, stockprice_init, stockprice_lookup, LookupStatus};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn take(ptr: *mut c_char) -> String {
    assert!(!ptr.is_null());
    let value = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
    unsafe { stockprice_free_string(ptr) };
    value
}

fn get_price(ticker: &str, date: &str) -> String {
    let ticker = CString::new(ticker).unwrap();
    let date = CString::new(date).unwrap();
    take(unsafe { getPrice(ticker.as_ptr(), date.as_ptr()) })
}

fn lookup(ticker: &str, date: &str) -> (i32, String) {
    let ticker = CString::new(ticker).unwrap();
    let date = CString::new(date).unwrap();
    let mut out: *mut c_char = ptr::null_mut();
    let code = unsafe { stockprice_lookup(ticker.as_ptr(), date.as_ptr(), &mut out) };
    (code, take(out))
}

#[test]
fn exports_against_mock_provider() {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap();

    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .and(query_param("symbol", "AAPL"))
            .and(query_param("apikey", "export-test-key"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(load_fixture("daily_adjusted.json")),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .and(query_param("symbol", "BUSY"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(load_fixture("note_rate_limited.json")),
            )
            .mount(&server)
            .await;
        server
    });

    std::env::set_var("ALPHA_API_KEY", "export-test-key");
    std::env::set_var("ALPHA_BASE_URL", server.uri());
    stockprice_init();

    assert_eq!(get_price("AAPL", "2024-01-02"), "185.64");
    assert_eq!(get_price("AAPL", "2024-01-02"), "185.64");
    assert_eq!(get_price("AAPL", "2024-01-01"), "");
    assert_eq!(get_price("BUSY", "2024-01-02"), "");

    assert_eq!(
        lookup("AAPL", "2024-01-03"),
        (LookupStatus::Price.code(), "183.99".to_string())
    );
    assert_eq!(
        lookup("AAPL", "2024-01-06"),
        (LookupStatus::NoTradingData.code(), String::new())
    );
    assert_eq!(
        lookup("BUSY", "2024-01-02"),
        (LookupStatus::UpstreamRateLimited.code(), String::new())
    );
    assert_eq!(
        lookup("", "2024-01-02"),
        (LookupStatus::InvalidArgument.code(), String::new())
    );
}
