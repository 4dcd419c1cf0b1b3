use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::Result;
use crate::index::TermFreq;
use crate::tokenizer::Lexer;

/// Build the term-count table for one XML/XHTML document.
///
/// Only character data between tags contributes terms; element names,
/// attributes and comments are structural and never counted. A
/// well-formedness error aborts this document and surfaces to the caller,
/// which decides whether to skip it or fail.
pub fn term_frequencies(content: &str) -> Result<TermFreq> {
    let mut reader = Reader::from_str(content);
    let mut tf = TermFreq::new();

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Text(text) => tally(&mut tf, &text.unescape()?),
            Event::CData(data) => {
                let text = String::from_utf8(data.into_inner().into_owned())?;
                tally(&mut tf, &text);
            }
            _ => {}
        }
    }

    Ok(tf)
}

fn tally(tf: &mut TermFreq, text: &str) {
    for term in Lexer::new(text) {
        *tf.entry(term).or_insert(0) += 1;
    }
}
