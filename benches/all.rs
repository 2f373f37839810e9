#[macro_use]
extern crate bencher;

use bencher::{black_box, Bencher};

fn to_ascii_ascii(bench: &mut Bencher) {
    bench.iter(|| idna_ace::domain_to_ascii(black_box("example.com")))
}

fn to_ascii_mapped(bench: &mut Bencher) {
    bench.iter(|| idna_ace::domain_to_ascii(black_box("ExAmPlE.COM")))
}

fn to_ascii_punycode(bench: &mut Bencher) {
    bench.iter(|| idna_ace::domain_to_ascii(black_box("mañana.example.com")))
}

fn to_unicode_punycode(bench: &mut Bencher) {
    bench.iter(|| idna_ace::domain_to_unicode(black_box("xn--maana-pta.example.com")))
}

benchmark_group!(
    benches,
    to_ascii_ascii,
    to_ascii_mapped,
    to_ascii_punycode,
    to_unicode_punycode
);
benchmark_main!(benches);
