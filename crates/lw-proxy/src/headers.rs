use http::{HeaderMap, HeaderName, header};

/// Connection-scoped headers that describe a single hop.
const HOP_BY_HOP: [&str; 5] = [
    "connection",
    "keep-alive",
    "proxy-connection",
    "transfer-encoding",
    "upgrade",
];

fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(&name.as_str())
}

/// Inbound headers to send upstream: everything except `host` and hop-by-hop headers.
pub fn forwardable_request_headers(headers: &HeaderMap) -> HeaderMap {
    let mut forwarded = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if name == header::HOST || is_hop_by_hop(name) {
            continue;
        }
        forwarded.append(name.clone(), value.clone());
    }
    forwarded
}

/// Copy the first value of every response header.
///
/// Later values of a repeated header are dropped.
pub fn copy_response_headers(from: &HeaderMap, to: &mut HeaderMap) {
    for name in from.keys() {
        if is_hop_by_hop(name) {
            continue;
        }
        if let Some(value) = from.get(name) {
            to.insert(name.clone(), value.clone());
        }
    }
}
