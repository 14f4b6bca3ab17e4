use criterion::{criterion_group, criterion_main};


criterion_group!(
    benches,
    network::application::http::parser::bench_consume_request,
    network::application::http::parser::bench_param_lookup,
    network::application::http::response::bench_send_text,
    network::application::http::response::bench_send_from_storage
);
criterion_main!(benches);
