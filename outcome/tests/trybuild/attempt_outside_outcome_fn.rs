fn halve(n: u32) -> outcome::Outcome<u32> {
    outcome::succeed(n / 2)
}

fn main() {
    let half = outcome::attempt!(halve(4));
    assert_eq!(half, 2);
}
