//! `urlhelper relative|absolute|scheme` – render a URL.

use urlhelper_core::{MultiParams, UrlHelper};

fn to_params(query: &[(String, String)]) -> MultiParams {
    query.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
}

pub fn run_relative(urls: &dyn UrlHelper, path: &str, query: &[(String, String)]) -> String {
    urls.relative(path, &[&to_params(query)])
}

pub fn run_absolute(urls: &dyn UrlHelper, path: &str, query: &[(String, String)]) -> String {
    urls.absolute(path, &[&to_params(query)])
}

pub fn run_scheme(urls: &dyn UrlHelper, path: &str, scheme: &str, query: &[(String, String)]) -> String {
    urls.scheme(path, scheme, &[&to_params(query)])
}
