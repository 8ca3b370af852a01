use tank3d::{Settings, flow};

fn main() -> anyhow::Result<()> {
    flow::run(Settings::default())
}
