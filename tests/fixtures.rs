use std::path::PathBuf;

use segdiff::driver::{run_files, Options, Summary};
use segdiff::render::Style;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test").join(name)
}

#[test]
fn annotates_fixture_files() {
    let mut out = Vec::new();
    let summary = run_files(
        &fixture("reference.txt"),
        &fixture("candidate.txt"),
        &mut out,
        Options {
            style: Style::Brackets,
            keep_going: false,
        },
    )
    .unwrap();
    let expected = "\
我 爱 北京 天安门
{我爱} 北京 {天} {安门}
天安门 上 太阳 升
{天安} [门上] 太阳 升
中华人民共和国 成立 了
{中华} {人民} {共和国} 成立 了
";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
    assert_eq!(
        summary,
        Summary {
            lines: 3,
            skipped: 0,
            violating: 1,
            divergent: 7,
            matching: 5,
        }
    );
}

#[test]
fn reference_against_itself_is_all_matching() {
    let mut out = Vec::new();
    let summary = run_files(
        &fixture("reference.txt"),
        &fixture("reference.txt"),
        &mut out,
        Options::default(),
    )
    .unwrap();
    assert_eq!(summary.violating + summary.divergent, 0);
    assert_eq!(summary.matching, 11);
}
