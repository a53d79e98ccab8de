fn main() -> anyhow::Result<()> {
    benchtex_cli::run()
}
