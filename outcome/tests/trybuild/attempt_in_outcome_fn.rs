fn halve(n: u32) -> outcome::Outcome<u32> {
    if n % 2 == 0 {
        outcome::succeed(n / 2)
    } else {
        outcome::fail(format!("{n} is odd"))
    }
}

fn quarter(n: u32) -> outcome::Outcome<u32> {
    let half = outcome::attempt!(halve(n));
    halve(half)
}

fn main() {
    assert_eq!(quarter(8), outcome::succeed(2));
    assert_eq!(quarter(6), outcome::fail("3 is odd".to_owned()));
}
