use exploder::lowlevel::cut_surface;
use exploder::{CutRect, ExploderError, ImageView, Surface};

fn gradient(width: usize, height: usize) -> Surface {
    let data = (0..height)
        .flat_map(|y| (0..width).map(move |x| [x as u8, y as u8, (x * y) as u8, 255]))
        .collect();
    Surface::new(data, width, height).unwrap()
}

#[test]
fn image_view_rejects_invalid_dimensions() {
    let data = [[0u8; 4]; 4];

    let err = ImageView::from_slice(&data, 0, 1).err().unwrap();
    assert_eq!(
        err,
        ExploderError::InvalidDimensions {
            width: 0,
            height: 1,
        }
    );

    let err = ImageView::new(&data, 4, 1, 3).err().unwrap();
    assert_eq!(
        err,
        ExploderError::InvalidStride {
            width: 4,
            stride: 3,
        }
    );

    let err = ImageView::new(&data, 2, 3, 2).err().unwrap();
    assert_eq!(err, ExploderError::BufferTooSmall { needed: 6, got: 4 });
}

#[test]
fn image_view_roi_matches_expected_values() {
    let data: Vec<u8> = (0u8..16).collect();
    let view = ImageView::from_slice(&data, 4, 4).unwrap();

    let roi = view.roi(1, 1, 2, 2).unwrap();
    assert_eq!(roi.width(), 2);
    assert_eq!(roi.height(), 2);
    assert_eq!(roi.stride(), 4);
    assert_eq!(roi.row(0).unwrap(), &[5u8, 6u8]);
    assert_eq!(roi.row(1).unwrap(), &[9u8, 10u8]);
    assert!(roi.get(2, 0).is_none());

    let err = view.roi(3, 3, 2, 2).err().unwrap();
    assert_eq!(
        err,
        ExploderError::RoiOutOfBounds {
            x: 3,
            y: 3,
            width: 2,
            height: 2,
            img_width: 4,
            img_height: 4,
        }
    );
}

#[test]
fn cut_is_an_independent_copy() {
    let sheet = gradient(10, 8);
    let before = sheet.clone();
    let cut = cut_surface(sheet.view(), CutRect::new(3, 2, 4, 5)).unwrap();

    assert_eq!(sheet, before);
    assert_eq!((cut.width(), cut.height()), (4, 5));
    for y in 0..5 {
        for x in 0..4 {
            assert_eq!(cut.get(x, y), sheet.get(x + 3, y + 2));
        }
    }
}

#[test]
fn cut_of_a_roi_view_uses_view_coordinates() {
    let sheet = gradient(10, 8);
    let roi = sheet.view().roi(2, 2, 6, 6).unwrap();
    let cut = cut_surface(roi, CutRect::new(1, 1, 2, 2)).unwrap();
    assert_eq!(cut.get(0, 0), sheet.get(3, 3));
    assert_eq!(cut.get(1, 1), sheet.get(4, 4));
}

#[test]
fn cut_spanning_the_whole_sheet_pads_every_edge() {
    let sheet = gradient(2, 2);
    let cut = cut_surface(sheet.view(), CutRect::new(-1, -1, 4, 4)).unwrap();
    assert_eq!(cut.get(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(cut.get(1, 1), sheet.get(0, 0));
    assert_eq!(cut.get(2, 2), sheet.get(1, 1));
    assert_eq!(cut.get(3, 3), Some([0, 0, 0, 0]));
}

#[test]
fn cut_from_a_padded_buffer_clips_at_the_view_edge() {
    // Three visible columns per row, one padding column.
    let data: Vec<[u8; 4]> = (0u8..12).map(|v| [v, 0, 0, 255]).collect();
    let view = ImageView::new(&data, 3, 3, 4).unwrap();

    let cut = cut_surface(view, CutRect::new(1, 1, 3, 2)).unwrap();
    assert_eq!(cut.get(0, 0), Some([5, 0, 0, 255]));
    assert_eq!(cut.get(1, 1), Some([10, 0, 0, 255]));
    assert_eq!(cut.get(2, 0), Some([0, 0, 0, 0]));
    assert_eq!(cut.get(2, 1), Some([0, 0, 0, 0]));
}
