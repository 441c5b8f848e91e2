// Criterion benchmarks for laoword-lo.
//
// Run:
//   cargo bench -p laoword-lo

use criterion::{Criterion, criterion_group, criterion_main};
use laoword_lo::LaoHandle;

const PARAGRAPH: &str = "ສະບາຍດີ ຂ້ອຍຊື່ສົມພອນ ຂ້ອຍມາຈາກປະເທດລາວ. \
                         ນະຄອນຫຼວງວຽງຈັນເປັນເມືອງທີ່ສວຍງາມຫຼາຍໆ \
                         ແລະ ມີວັດວາອາຮາມຫຼາຍແຫ່ງ (Vientiane, 2024).";

const WORDS: &[&str] = &[
    "ປະເທດ", "ລາວ", "ສະບາຍ", "ດີ", "ເຈົ້າ", "ແມ່ນ", "ໃຜ", "ຂ້ອຍ", "ຫຼາຍ", "ເມືອງ",
    "ກກ", "ກ້", "ທ້ດ", "ລວ", "ໆ", "ຳ", "ເເກ", "abc", "ວຽງ", "ສວຍ",
];

fn long_text() -> String {
    std::iter::repeat_n(PARAGRAPH, 50).collect::<Vec<_>>().join(" ")
}

/// Segment one paragraph.
fn bench_segment_paragraph(c: &mut Criterion) {
    c.bench_function("segment_paragraph", |b| {
        b.iter(|| std::hint::black_box(laoword_lo::segment(PARAGRAPH)));
    });
}

/// Segment fifty copies of the paragraph.
fn bench_segment_long(c: &mut Criterion) {
    let text = long_text();
    c.bench_function("segment_50_paragraphs", |b| {
        b.iter(|| std::hint::black_box(laoword_lo::segment(&text)));
    });
}

/// Validate a fixed list of valid and invalid words.
fn bench_validate_words(c: &mut Criterion) {
    c.bench_function("validate_20_words", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(laoword_lo::validate(word));
            }
        });
    });
}

/// Segment and validate fifty paragraphs.
fn bench_check_long(c: &mut Criterion) {
    let text = long_text();
    c.bench_function("check_50_paragraphs", |b| {
        b.iter(|| std::hint::black_box(laoword_lo::check(&text)));
    });
}

/// Line-based error reporting through the handle.
fn bench_grammar_errors_from_text(c: &mut Criterion) {
    let handle = LaoHandle::default();
    let text = std::iter::repeat_n(PARAGRAPH, 50).collect::<Vec<_>>().join("\n");
    c.bench_function("grammar_errors_50_lines", |b| {
        b.iter(|| std::hint::black_box(handle.grammar_errors_from_text(&text)));
    });
}

criterion_group!(
    benches,
    bench_segment_paragraph,
    bench_segment_long,
    bench_validate_words,
    bench_check_long,
    bench_grammar_errors_from_text,
);
criterion_main!(benches);
