use sprawl_core::PromptKind;

pub fn run(kind: &str) -> Result<(), String> {
    let kind = PromptKind::parse(kind)
        .ok_or_else(|| format!("unknown prompt type: \"{kind}\" (try: cue, disposition)"))?;
    println!("  {}", kind.text());
    Ok(())
}
