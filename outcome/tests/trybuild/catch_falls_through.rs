fn halve(n: u32) -> outcome::Outcome<u32> {
    outcome::succeed(n / 2)
}

fn main() {
    let n: u32 = outcome::catch!(halve(3), _failure => {});
    assert_eq!(n, 1);
}
