fn main() -> anyhow::Result<()> {
    sandbox_browser_lib::run()
}
