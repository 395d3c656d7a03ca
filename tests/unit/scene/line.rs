use super::*;

#[test]
fn width_follows_buffers() {
    let mut quality = vec![0.0f32; 4];
    let alpha = [255u8, 0, 255, 0];
    let line = Line::new(3, &mut quality, &alpha).unwrap();
    assert_eq!(line.width(), 4);
    assert_eq!(line.band_count(), 3);
    assert_eq!(line.alpha(), &alpha);
}

#[test]
fn mismatched_buffers_are_rejected() {
    let mut quality = vec![0.0f32; 3];
    let alpha = [255u8; 4];
    let err = Line::new(1, &mut quality, &alpha).unwrap_err();
    assert!(matches!(err, QualityError::Validation(_)));
}

#[test]
fn writes_land_in_caller_buffer() {
    let mut quality = vec![0.0f32; 2];
    let alpha = [255u8, 10];
    {
        let mut line = Line::new(1, &mut quality, &alpha).unwrap();
        let (q, a) = line.quality_and_alpha();
        for (q, &a) in q.iter_mut().zip(a) {
            *q = f32::from(a);
        }
        assert_eq!(line.quality(), &[255.0, 10.0]);
    }
    assert_eq!(quality, vec![255.0, 10.0]);
}
