//! `veltrix knowledge` — Inspect the assembled site knowledge blob.

pub async fn run(stats: bool) -> Result<(), Box<dyn std::error::Error>> {
    let blob = veltrix_content::assemble_knowledge();

    if stats {
        let sections = blob.lines().filter(|l| l.starts_with("## ")).count();
        println!("Characters: {}", blob.chars().count());
        println!("Lines:      {}", blob.lines().count());
        println!("Sections:   {sections}");
    } else {
        println!("{blob}");
    }

    Ok(())
}
