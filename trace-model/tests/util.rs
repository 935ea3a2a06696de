use similar::ChangeTag;
use similar::TextDiff;

pub fn assert_text_eq(expected: &str, actual: &str) {
  if expected == actual {
    return;
  }
  let mut msg = String::from("dump mismatch:\n");
  let diff = TextDiff::from_lines(expected, actual);
  for change in diff.iter_all_changes() {
    let sign = match change.tag() {
      ChangeTag::Delete => "-",
      ChangeTag::Insert => "+",
      ChangeTag::Equal => " ",
    };
    msg.push_str(sign);
    msg.push_str(change.as_str().unwrap());
  }
  panic!("{}", msg);
}
