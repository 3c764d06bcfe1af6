use shoots3_core::sniff::{detect_content_type, OCTET_STREAM, SNIFF_LEN, TEXT_PLAIN_UTF8};

#[test]
fn png_magic_is_image_png() {
    let mut data = b"\x89PNG\r\n\x1a\n".to_vec();
    data.extend_from_slice(&[0, 0, 0, 13, b'I', b'H', b'D', b'R']);
    assert_eq!(detect_content_type(&data), "image/png");
}

#[test]
fn ascii_text_is_plain_utf8() {
    assert_eq!(
        detect_content_type(b"hello world\nsecond line\n"),
        TEXT_PLAIN_UTF8
    );
}

#[test]
fn empty_input_is_plain_text() {
    assert_eq!(detect_content_type(b""), TEXT_PLAIN_UTF8);
}

#[test]
fn binary_control_bytes_fall_back_to_octet_stream() {
    assert_eq!(detect_content_type(b"abc\x00def"), OCTET_STREAM);
    assert_eq!(detect_content_type(&[0x01, 0x02, 0x03, 0x04, 0x05]), OCTET_STREAM);
}

#[test]
fn html_is_case_insensitive_and_skips_leading_whitespace() {
    assert_eq!(
        detect_content_type(b"  \n<!doctype html><html></html>"),
        "text/html; charset=utf-8"
    );
    assert_eq!(
        detect_content_type(b"<HtMl>"),
        "text/html; charset=utf-8"
    );
    assert_eq!(
        detect_content_type(b"<p class=\"x\">"),
        "text/html; charset=utf-8"
    );
}

#[test]
fn html_tag_must_be_terminated() {
    // "<PRE" starts like "<P" but the next byte is not a space or '>'.
    assert_eq!(detect_content_type(b"<PRE>code</PRE>"), TEXT_PLAIN_UTF8);
}

#[test]
fn xml_declaration_after_whitespace() {
    assert_eq!(
        detect_content_type(b"\r\n<?xml version=\"1.0\"?><a/>"),
        "text/xml; charset=utf-8"
    );
}

#[test]
fn document_formats() {
    assert_eq!(detect_content_type(b"%PDF-1.7\n"), "application/pdf");
    assert_eq!(
        detect_content_type(b"%!PS-Adobe-3.0\n"),
        "application/postscript"
    );
}

#[test]
fn byte_order_marks() {
    assert_eq!(
        detect_content_type(b"\xFE\xFF\x00h"),
        "text/plain; charset=utf-16be"
    );
    assert_eq!(
        detect_content_type(b"\xFF\xFEh\x00"),
        "text/plain; charset=utf-16le"
    );
    assert_eq!(detect_content_type(b"\xEF\xBB\xBFhi"), TEXT_PLAIN_UTF8);
}

#[test]
fn images() {
    assert_eq!(detect_content_type(b"GIF89a\x01\x00"), "image/gif");
    assert_eq!(detect_content_type(b"GIF87a\x01\x00"), "image/gif");
    assert_eq!(detect_content_type(b"\xFF\xD8\xFF\xE0\x00\x10JFIF"), "image/jpeg");
    assert_eq!(detect_content_type(b"BM\x36\x00\x00\x00"), "image/bmp");
    assert_eq!(
        detect_content_type(b"RIFF\x24\x00\x00\x00WEBPVP8 "),
        "image/webp"
    );
    assert_eq!(detect_content_type(b"\x00\x00\x01\x00\x01\x00"), "image/x-icon");
}

#[test]
fn audio_and_video() {
    assert_eq!(detect_content_type(b"ID3\x03\x00\x00"), "audio/mpeg");
    assert_eq!(detect_content_type(b"OggS\x00\x02"), "application/ogg");
    assert_eq!(
        detect_content_type(b"RIFF\x24\x00\x00\x00WAVEfmt "),
        "audio/wave"
    );
    assert_eq!(
        detect_content_type(b"RIFF\x24\x00\x00\x00AVI LIST"),
        "video/avi"
    );
    assert_eq!(detect_content_type(b"\x1A\x45\xDF\xA3\x9F"), "video/webm");
}

#[test]
fn mp4_ftyp_box() {
    let mut data = vec![0x00, 0x00, 0x00, 0x18];
    data.extend_from_slice(b"ftypisom");
    data.extend_from_slice(&[0x00, 0x00, 0x02, 0x00]);
    data.extend_from_slice(b"isommp41");
    assert_eq!(data.len(), 0x18);
    assert_eq!(detect_content_type(&data), "video/mp4");
}

#[test]
fn mp4_brand_in_minor_version_slot_is_ignored() {
    let mut data = vec![0x00, 0x00, 0x00, 0x10];
    data.extend_from_slice(b"ftypisom");
    data.extend_from_slice(b"mp42");
    assert_ne!(detect_content_type(&data), "video/mp4");
}

#[test]
fn fonts_and_archives() {
    assert_eq!(detect_content_type(b"wOFF\x00\x01"), "font/woff");
    assert_eq!(detect_content_type(b"wOF2\x00\x01"), "font/woff2");
    assert_eq!(detect_content_type(b"OTTO\x00\x0A"), "font/otf");
    assert_eq!(detect_content_type(b"\x1F\x8B\x08\x00"), "application/x-gzip");
    assert_eq!(detect_content_type(b"PK\x03\x04\x14\x00"), "application/zip");
    assert_eq!(
        detect_content_type(b"Rar!\x1A\x07\x01\x00"),
        "application/x-rar-compressed"
    );
    assert_eq!(detect_content_type(b"\x00asm\x01\x00\x00\x00"), "application/wasm");
}

#[test]
fn only_the_first_512_bytes_are_considered() {
    let mut data = vec![b'a'; SNIFF_LEN];
    data.push(0x00);
    assert_eq!(detect_content_type(&data), TEXT_PLAIN_UTF8);
}
