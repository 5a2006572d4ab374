//! C exports for adjusted closing price lookup.
//!
//! Build as a `cdylib` and load it from any host with a C FFI, for example
//! Python `ctypes`:
//!
//! ```python
//! lib = ctypes.cdll.LoadLibrary("./libstockprice.so")
//! lib.getPrice.argtypes = [ctypes.c_char_p, ctypes.c_char_p]
//! lib.getPrice.restype = ctypes.c_char_p
//! lib.getPrice(b"AAPL", b"2024-01-02")
//! ```
//!
//! # Ownership
//!
//! Every `char *` returned by this library is allocated here and must be
//! released with [`stockprice_free_string`], exactly once. Hosts that copy the
//! result and never free it (as `ctypes` does with `c_char_p`) leak one small
//! string per call, which is safe.
//!
//! # Configuration
//!
//! On first use the library loads `.env`, installs a `tracing` subscriber
//! (`RUST_LOG`), and reads `ALPHA_API_KEY`, `ALPHA_BASE_URL` and
//! `ALPHA_TIMEOUT_SECS`. The resulting settings are fixed for the life of
//! the process.
#![warn(unsafe_op_in_unsafe_fn)]

pub mod bridge;
pub mod logging;

use std::ffi::{c_char, CStr, CString};
use std::panic::{self, AssertUnwindSafe};
use std::sync::OnceLock;

use stockprice_lib::PriceFetcher;

pub use bridge::LookupStatus;

static FETCHER: OnceLock<PriceFetcher> = OnceLock::new();

fn fetcher() -> &'static PriceFetcher {
    FETCHER.get_or_init(|| {
        logging::init();
        let fetcher = PriceFetcher::from_env();
        tracing::info!("Price fetcher ready: {:?}", fetcher.config());
        fetcher
    })
}

/// Reads a caller string. `None` for null or non-UTF-8 input.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that stays valid
/// for the returned lifetime.
unsafe fn read_arg<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

fn into_c_string(value: String) -> *mut c_char {
    // Interior NULs cannot cross the boundary; send nothing rather than a cut value.
    CString::new(value).unwrap_or_default().into_raw()
}

fn guarded<T>(fallback: T, f: impl FnOnce() -> T) -> T {
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|_| {
        tracing::error!("Panic inside price lookup");
        fallback
    })
}

/// Initializes logging and `.env` loading. Optional; the lookups do it lazily.
#[no_mangle]
pub extern "C" fn stockprice_init() {
    guarded((), logging::init);
}

/// Returns the adjusted close for `ticker` on `date` (`YYYY-MM-DD`), or an
/// empty string when there is none or the lookup failed.
///
/// # Safety
///
/// `ticker` and `date` must each be null or a valid NUL-terminated string.
/// The result must be released with [`stockprice_free_string`].
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn getPrice(ticker: *const c_char, date: *const c_char) -> *mut c_char {
    let args = unsafe { (read_arg(ticker), read_arg(date)) };
    let price = guarded(String::new(), || match args {
        (Some(ticker), Some(date)) => bridge::price_string(fetcher(), ticker, date),
        _ => {
            logging::init();
            tracing::warn!("getPrice called with a null or non-UTF-8 argument");
            String::new()
        }
    });
    into_c_string(price)
}

/// Classified lookup. Writes the price (or an empty string) to `*out` and
/// returns a [`LookupStatus`] code.
///
/// `*out` is only written when `out` is not null; a null `out` returns
/// `InvalidArgument` without doing a lookup.
///
/// # Safety
///
/// `ticker` and `date` must each be null or a valid NUL-terminated string,
/// and `out` must be null or valid for a pointer write. A string written to
/// `*out` must be released with [`stockprice_free_string`].
#[no_mangle]
pub unsafe extern "C" fn stockprice_lookup(
    ticker: *const c_char,
    date: *const c_char,
    out: *mut *mut c_char,
) -> i32 {
    if out.is_null() {
        return LookupStatus::InvalidArgument.code();
    }
    let args = unsafe { (read_arg(ticker), read_arg(date)) };
    let (status, price) = guarded((LookupStatus::Internal, String::new()), || match args {
        (Some(ticker), Some(date)) => bridge::lookup_status(fetcher(), ticker, date),
        _ => (LookupStatus::InvalidArgument, String::new()),
    });
    unsafe { out.write(into_c_string(price)) };
    status.code()
}

/// Releases a string returned by this library. Null is ignored.
///
/// # Safety
///
/// `ptr` must be null or a pointer returned by [`getPrice`] or
/// [`stockprice_lookup`] that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn stockprice_free_string(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    drop(unsafe { CString::from_raw(ptr) });
}
