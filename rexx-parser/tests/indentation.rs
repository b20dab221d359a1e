use rexx_parser::{compute_indent, reindent, IndentOptions, LineSource, TextBuffer};
use rstest::rstest;

fn indents(source: &str, offset: usize) -> Vec<usize> {
    let buffer = TextBuffer::new(source);
    (0..buffer.line_count())
        .map(|line| compute_indent(&buffer, line, offset))
        .collect()
}

#[test]
fn test_select_when_then() {
    assert_eq!(indents("select\nwhen 1 then\nsay 'one'", 2), vec![0, 0, 2]);
}

#[test]
fn test_end_after_do_block() {
    assert_eq!(indents("do\n  say 1\nend", 2)[2], 0);
}

#[rstest]
#[case::do_block("do", 2)]
#[case::loop_block("loop i = 1 to 10", 2)]
#[case::select_block("SELECT", 2)]
#[case::then_clause("if a = b then", 2)]
#[case::else_clause("else", 2)]
#[case::plain("say 'hello'", 0)]
#[case::opener_in_string("say 'do'", 2)]
#[case::opener_in_stem("stem.then = 1", 2)]
#[case::opener_in_comment("nop /* then */", 0)]
#[case::opener_as_part_of_word("done = 1", 0)]
fn test_line_after(#[case] previous: &str, #[case] expected: usize) {
    let buffer = vec![previous, "x = 1"];
    assert_eq!(compute_indent(&buffer, 1, 2), expected);
}

#[rstest]
#[case("end")]
#[case("END")]
#[case("when x then")]
#[case("Otherwise")]
fn test_closers_step_back(#[case] line: &str) {
    let buffer = vec!["    say 1", line];
    assert_eq!(compute_indent(&buffer, 1, 2), 2);
    assert_eq!(compute_indent(&buffer, 1, 8), 0);
}

#[test]
fn test_blank_and_comment_lines_are_skipped() {
    let source = "if x then\n\n-- about y\n/* long\n   comment */\ny = 1";
    assert_eq!(indents(source, 2)[5], 2);
}

#[rstest]
#[case::comment_tail("  /* comment\n  we do this */ x = 1", 2)]
#[case::comment_tail_opens("  /* comment\n  note */ do", 4)]
#[case::comment_body("do\n/* a\n   then", 2)]
#[case::string_tail("  say 'one\n  then' x", 2)]
#[case::string_tail_opens("  say 'one\n  two' then", 4)]
fn test_line_after_region_continuation(#[case] above: &str, #[case] expected: usize) {
    let source = format!("{above}\ny = 2");
    let buffer = TextBuffer::new(&source);
    let last = buffer.line_count() - 1;
    assert_eq!(compute_indent(&buffer, last, 2), expected);
}

#[test]
fn test_tabs_count_to_next_stop() {
    assert_eq!(indents("\tdo\nx", 2)[1], 10);
}

#[test]
fn test_start_of_buffer_is_zero() {
    assert_eq!(indents("   say 1", 2), vec![0]);
    assert_eq!(compute_indent(&TextBuffer::new(""), 0, 2), 0);
}

#[test]
fn test_compute_indent_is_idempotent() {
    let buffer = TextBuffer::new("do\nselect\nwhen a then\nnop\nend");
    for line in 0..buffer.line_count() {
        assert_eq!(
            compute_indent(&buffer, line, 2),
            compute_indent(&buffer, line, 2)
        );
    }
}

#[test]
fn test_reindent_program() {
    let source = "\
main: procedure
do i = 1 to 3
say i
      if i = 2 then do
say 'two'
end
  end
select
  when i = 1 then
say 'one'
when i = 2 then
say 'two'
end

return
";
    let expected = "\
main: procedure
do i = 1 to 3
  say i
  if i = 2 then do
    say 'two'
  end
end
select
when i = 1 then
  say 'one'
when i = 2 then
  say 'two'
end

return
";
    let options = IndentOptions::default();
    let once = reindent(source, &options);
    assert_eq!(once, expected);
    assert_eq!(reindent(&once, &options), once);
}

#[test]
fn test_reindent_with_wider_offset() {
    let source = "do
say 1
end
";
    assert_eq!(
        reindent(source, &IndentOptions::new(4)),
        "do\n    say 1\nend\n"
    );
}
