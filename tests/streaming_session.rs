//! Pipeline properties over the public API: framing is invariant under
//! chunking, content accumulation is append-only, and multi-byte characters
//! survive arbitrary chunk boundaries.

use specgen_client::utils::Utf8StreamDecoder;
use specgen_client::StreamSession;
use tokio_stream::StreamExt;

const STREAM: &str = concat!(
    "{\"type\":\"reasoning\",\"content\":\"think\"}\n",
    "{\"type\":\"content\",\"content\":\"# Title\\n\"}\n",
    "\n",
    "{\"type\":\"content\",\"content\":\"body\"}\n",
    "{\"type\":\"usage\",\"input_tokens\":10,\"output_tokens\":20,\"total_tokens\":30}\n",
);

fn run_whole(input: &str) -> StreamSession {
    let mut session = StreamSession::new();
    session.push_chunk(input);
    session
}

#[test]
fn framing_is_invariant_under_any_two_way_split() {
    let expected = run_whole(STREAM);

    for (i, _) in STREAM.char_indices() {
        let (a, b) = STREAM.split_at(i);
        let mut session = StreamSession::new();
        session.push_chunk(a);
        session.push_chunk(b);

        assert_eq!(
            session.state(),
            expected.state(),
            "split at byte {i} changed the parse"
        );
    }
}

#[test]
fn framing_is_invariant_under_byte_sized_fragments() {
    let expected = run_whole(STREAM);

    let mut session = StreamSession::new();
    let mut buf = [0u8; 4];
    for c in STREAM.chars() {
        session.push_chunk(c.encode_utf8(&mut buf));
    }

    assert_eq!(session.state(), expected.state());
}

#[test]
fn content_is_ordered_concatenation_of_deltas() {
    let mut session = StreamSession::new();
    for piece in ["alpha ", "beta ", "gamma"] {
        session.push_chunk(&format!(
            "{{\"type\":\"content\",\"content\":\"{piece}\"}}\n"
        ));
    }
    assert_eq!(session.state().markdown_content(), "alpha beta gamma");
}

#[test]
fn trailing_unterminated_line_is_dropped() {
    // Deliberate: the framer never flushes a partial tail at end-of-stream,
    // so a final event line without a newline is lost.
    let mut session = StreamSession::new();
    session.push_chunk("{\"type\":\"content\",\"content\":\"kept\"}\n");
    session.push_chunk("{\"type\":\"content\",\"content\":\"lost\"}");

    assert_eq!(session.state().markdown_content(), "kept");
}

#[test]
fn usage_events_replace_wholesale() {
    let mut session = StreamSession::new();
    session.push_chunk("{\"type\":\"usage\",\"input_tokens\":1,\"output_tokens\":2,\"total_tokens\":3}\n");
    session.push_chunk("{\"type\":\"usage\",\"input_tokens\":4,\"output_tokens\":5,\"total_tokens\":6}\n");

    let usage = session.state().token_usage().unwrap();
    assert_eq!(
        (usage.input_tokens, usage.output_tokens, usage.total_tokens),
        (4, 5, 6)
    );
}

#[tokio::test]
async fn chunked_async_source_accumulates_in_order() {
    let fragments = vec![
        "{\"type\":\"content\",",
        "\"content\":\"A\"}\n{\"type\":",
        "\"content\",\"content\":\"B\"}\n",
    ];

    let mut source = tokio_stream::iter(fragments);
    let mut session = StreamSession::new();
    while let Some(fragment) = source.next().await {
        session.push_chunk(fragment);
    }

    assert_eq!(session.state().markdown_content(), "AB");
}

#[test]
fn multi_byte_character_split_across_chunks_decodes_intact() {
    // "❌" is three bytes; split its encoding across two reads.
    let line = "{\"type\":\"content\",\"content\":\"a❌b\"}\n".as_bytes();
    let split = line.len() - 8;

    for split in [split, split + 1, split + 2] {
        let mut decoder = Utf8StreamDecoder::new();
        let mut session = StreamSession::new();

        let first = decoder.decode(&line[..split]);
        session.push_chunk(&first);
        let second = decoder.decode(&line[split..]);
        session.push_chunk(&second);
        assert!(decoder.flush().is_empty());

        assert_eq!(
            session.state().markdown_content(),
            "a❌b",
            "split at byte {split} corrupted the character"
        );
    }
}

#[test]
fn utf8_decoder_flushes_dangling_partial_as_replacement() {
    let mut decoder = Utf8StreamDecoder::new();
    let bytes = "é".as_bytes();

    assert_eq!(decoder.decode(&bytes[..1]), "");
    assert_eq!(decoder.flush(), "\u{FFFD}");
    // Flushed means gone: the next stream starts clean.
    assert_eq!(decoder.decode("ok".as_bytes()), "ok");
}
