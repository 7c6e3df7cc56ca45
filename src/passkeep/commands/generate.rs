use crate::commands::CmdResult;
use crate::error::Result;
use crate::generator;
use crate::model::GenerationOptions;
use crate::strength;

pub fn run(options: &GenerationOptions) -> Result<CmdResult> {
    let pool = generator::build_pool(options)?;
    let password = generator::generate(&pool, options.length)?;
    let strength = strength::score(&password);

    Ok(CmdResult::default()
        .with_password(password)
        .with_strength(strength))
}
