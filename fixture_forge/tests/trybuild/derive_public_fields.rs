mod domain {
    use fixture_forge::Fixture;

    #[derive(Debug, Clone, Fixture)]
    pub struct User {
        #[fixture(default = String::from("root"))]
        pub login: String,
        #[fixture(default = 0)]
        uid: u32,
    }

    impl User {
        pub fn uid(&self) -> u32 {
            self.uid
        }
    }
}

use domain::User;
use fixture_forge::{Builder, Overrides};

fn main() -> Result<(), fixture_forge::FixtureError> {
    let user = Builder::new()
        .fixture::<User>()
        .override_value(User::login_field(), "admin")
        .get()?;
    assert_eq!(user.login, "admin");
    assert_eq!(user.uid(), 0);
    Ok(())
}
