use crate::commands::CmdResult;
use crate::error::Result;
use crate::strength;

pub fn run(password: &str) -> Result<CmdResult> {
    Ok(CmdResult::default().with_strength(strength::score(password)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength::Strength;

    #[test]
    fn scores_are_passed_through() {
        assert_eq!(run("").unwrap().strength, Some(Strength::Weak));
        assert_eq!(
            run("Abcdefghijk1!").unwrap().strength,
            Some(Strength::Strong)
        );
    }
}
