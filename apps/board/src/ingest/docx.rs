use std::path::Path;

use anyhow::{Context, Result};
use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};

/// Reads a `.docx` file and returns its paragraphs' text in document order.
///
/// Empty paragraphs are kept so the joined text keeps the author's blank lines.
/// Tables, images and other non-paragraph blocks are skipped.
pub fn read_paragraphs(path: &Path) -> Result<Vec<String>> {
    let bytes = std::fs::read(path).with_context(|| format!("Cannot read '{}'", path.display()))?;

    let docx = docx_rs::read_docx(&bytes)
        .map_err(|e| anyhow::anyhow!("docx parse error in '{}': {e:?}", path.display()))?;

    Ok(docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect())
}

/// Paragraph text is its runs' text concatenated with no separator, including
/// runs nested inside hyperlinks.
fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    push_children_text(&para.children, &mut text);
    text
}

fn push_children_text(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for rc in &run.children {
                    match rc {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(_) => text.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_children_text(&link.children, text),
            _ => {}
        }
    }
}

/// Writes a minimal `.docx` with one paragraph per line. Test fixture helper.
#[cfg(test)]
pub fn write_test_docx(path: &Path, paragraphs: &[&str]) -> Result<()> {
    use docx_rs::{Docx, Run};

    let mut doc = Docx::new();
    for line in paragraphs {
        let para = if line.is_empty() {
            Paragraph::new()
        } else {
            Paragraph::new().add_run(Run::new().add_text(*line))
        };
        doc = doc.add_paragraph(para);
    }

    let file = std::fs::File::create(path)?;
    doc.build()
        .pack(file)
        .map_err(|e| anyhow::anyhow!("failed to pack docx: {e:?}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_paragraphs_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.docx");
        write_test_docx(&path, &["Early warning gaps", "", "Community radio and sirens"]).unwrap();

        let paragraphs = read_paragraphs(&path).unwrap();
        assert_eq!(
            paragraphs,
            vec![
                "Early warning gaps".to_string(),
                String::new(),
                "Community radio and sirens".to_string(),
            ]
        );
    }

    #[test]
    fn test_hyperlink_text_is_kept() {
        use docx_rs::{Docx, Hyperlink, HyperlinkType, Run};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linked.docx");
        let para = Paragraph::new()
            .add_run(Run::new().add_text("See "))
            .add_hyperlink(
                Hyperlink::new("https://example.org/floods", HyperlinkType::External)
                    .add_run(Run::new().add_text("flood map portal")),
            )
            .add_run(Run::new().add_text(" for gaps"));
        let file = std::fs::File::create(&path).unwrap();
        Docx::new().add_paragraph(para).build().pack(file).unwrap();

        assert_eq!(
            read_paragraphs(&path).unwrap(),
            vec!["See flood map portal for gaps".to_string()]
        );
    }

    #[test]
    fn test_rejects_non_docx_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Topic_1_Team_1.docx");
        std::fs::write(&path, b"plain text pretending to be a document").unwrap();

        assert!(read_paragraphs(&path).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_paragraphs(&dir.path().join("absent.docx")).is_err());
    }
}
