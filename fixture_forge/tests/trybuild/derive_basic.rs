use fixture_forge::{Builder, Fixture, FixtureError, Overrides};

#[derive(Debug, Clone, Fixture)]
struct Point {
    #[fixture(default = 0)]
    x: i32,
    #[fixture(default)]
    y: i32,
    #[fixture(default = None)]
    label: Option<String>,
}

fn main() -> Result<(), FixtureError> {
    let point = Builder::new()
        .fixture::<Point>()
        .override_value(Point::x_field(), 3_i32)
        .nullify(Point::label_field())
        .get()?;
    assert_eq!((point.x, point.y, point.label), (3, 0, None));
    Ok(())
}
