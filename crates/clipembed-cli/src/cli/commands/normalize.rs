//! `clipembed normalize <URL>` – print the canonical form.

use clipembed_core::normalize::normalize_url;

pub fn run_normalize(url: &str) {
    println!("{}", normalize_url(url));
}
