use duplex_impose::*;

#[test]
fn test_paper_dimensions() {
    assert_eq!(PaperSize::A4.dimensions_mm(), (Mm(210.0), Mm(297.0)));
    assert_eq!(
        PaperSize::A3.dimensions_with_orientation(Orientation::Landscape),
        (Mm(420.0), Mm(297.0))
    );
    assert_eq!(
        PaperSize::A3.dimensions_with_orientation(Orientation::Portrait),
        (Mm(297.0), Mm(420.0))
    );
}

#[test]
fn test_a3_is_two_a4_side_by_side() {
    let (a4_w, a4_h) = PaperSize::A4.dimensions_mm();
    let (a3_w, a3_h) = PaperSize::A3.dimensions_with_orientation(Orientation::Landscape);
    assert_eq!(a3_w, a4_w + a4_w);
    assert_eq!(a3_h, a4_h);
}

#[test]
fn test_sheet_side() {
    assert!(SheetSide::Back.is_back());
    assert!(!SheetSide::Front.is_back());
}

#[test]
fn test_load_errors_share_user_message() {
    let malformed = ImposeError::DocumentLoad("bad xref".to_string());
    let encrypted = ImposeError::Encrypted;

    assert!(malformed.is_load_error());
    assert!(encrypted.is_load_error());
    assert_eq!(malformed.user_message(), encrypted.user_message());
    assert_eq!(
        encrypted.user_message(),
        "Error processing the file. Make sure it is not password-protected."
    );
}

#[test]
fn test_other_errors_keep_their_message() {
    let err = ImposeError::Config("scale must be a positive number, got 0".to_string());
    assert!(!err.is_load_error());
    assert_eq!(
        err.user_message(),
        "Invalid configuration: scale must be a positive number, got 0"
    );
}
