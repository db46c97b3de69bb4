fn first_char(text: &str) -> outcome::Outcome<char> {
    match text.chars().next() {
        Some(c) => outcome::succeed(c),
        None => outcome::fail("empty".to_owned()),
    }
}

fn initial(text: &str) -> outcome::Outcome<String> {
    let c = outcome::catch!(first_char(text), failure => {
        return failure.map(String::from);
    });
    outcome::succeed(c.to_uppercase().collect())
}

fn main() {
    assert_eq!(initial("rust"), outcome::succeed("R".to_owned()));
    assert_eq!(initial(""), outcome::fail("empty".to_owned()));
}
