fn main() -> anyhow::Result<()> {
    halftone_tree::start()
}
