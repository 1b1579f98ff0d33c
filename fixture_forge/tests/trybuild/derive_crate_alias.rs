use fixture_forge as forge;

use forge::{Builder, Fixture};

#[derive(Debug, Clone, Fixture)]
#[fixture(crate = "forge")]
struct Flag {
    #[fixture(default = true)]
    enabled: bool,
}

fn main() -> Result<(), forge::FixtureError> {
    let flags = Builder::new().fixtures::<Flag>().size(2).get()?;
    assert!(flags.iter().all(|f| f.enabled));
    Ok(())
}
