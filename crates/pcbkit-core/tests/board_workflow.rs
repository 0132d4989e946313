use pcbkit_core::{
    Board, BoardSide, Footprint, FootprintAttributes, FootprintLibrary, Graphic, Layer, LayerSet,
    MemoryLibrary, Model3D, Pad, Point, Size,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn soic8() -> Footprint {
    let mut fp = Footprint::new("SOIC-8_3.9x4.9mm_P1.27mm");
    fp.set_description("8-pin small outline package");
    fp.set_keywords("SOIC SO");
    fp.set_attributes(FootprintAttributes::SMD);
    for i in 0..4 {
        let y = -1_905_000 + i * 1_270_000;
        fp.add_pad(
            Pad::smd(&(i + 1).to_string(), Size::new(1_550_000, 600_000))
                .at(Point::new(-2_475_000, y)),
        );
        fp.add_pad(
            Pad::smd(&(8 - i).to_string(), Size::new(1_550_000, 600_000))
                .at(Point::new(2_475_000, y)),
        );
    }
    fp.add_graphic(Graphic::polygon(
        vec![
            Point::new(-1_950_000, -2_450_000),
            Point::new(1_950_000, -2_450_000),
            Point::new(1_950_000, 2_450_000),
            Point::new(-1_950_000, 2_450_000),
        ],
        120_000,
        Layer::FrontSilkscreen,
    ));
    fp.add_model(Model3D::new("Package_SO.3dshapes/SOIC-8.wrl"));
    fp
}

#[test]
fn test_place_from_library_and_edit() {
    init_logging();

    let mut library = MemoryLibrary::new("Package_SO");
    library.save(&soic8()).unwrap();

    let mut board = Board::new("amplifier");
    let u1 = board.add_footprint(library.load("SOIC-8_3.9x4.9mm_P1.27mm").unwrap());
    let u2 = board.add_footprint(library.load("SOIC-8_3.9x4.9mm_P1.27mm").unwrap());

    {
        let fp = board.footprint_mut(u1).unwrap();
        fp.set_reference("U1");
        fp.set_position(Point::new(10_000_000, 10_000_000));
        fp.set_placed(true);
    }
    {
        let fp = board.footprint_mut(u2).unwrap();
        fp.set_reference("U2");
        fp.set_position(Point::new(30_000_000, 10_000_000));
        fp.rotate(Point::new(30_000_000, 10_000_000), 900);
        fp.flip(Point::new(30_000_000, 10_000_000));
    }

    assert_ne!(
        board.footprint(u1).unwrap().id(),
        board.footprint(u2).unwrap().id()
    );
    assert_eq!(board.footprint(u2).unwrap().select_menu_text(), "Footprint U2 on B.Cu");

    // Pin 1 of U1 sits left of its anchor.
    let pad = board
        .pad_at(Point::new(7_525_000, 8_095_000), LayerSet::F_CU)
        .unwrap();
    assert_eq!(pad.name, "1");

    assert_eq!(
        board.footprint_at(Point::new(10_000_000, 10_000_000), BoardSide::Front, false),
        Some(u1)
    );
    assert_eq!(
        board.footprint_at(Point::new(30_000_000, 10_000_000), BoardSide::Front, false),
        Some(u2)
    );

    // U2 was turned a quarter, so its pad rows are now stacked along y.
    let u2_fp = board.footprint(u2).unwrap();
    let rect = u2_fp.footprint_rect();
    assert!(rect.height() > rect.width());
    assert!(u2_fp.pads().iter().all(|p| p.layers.contains(LayerSet::B_CU)));
}

#[test]
fn test_remove_and_store_back() {
    init_logging();

    let mut board = Board::new("rework");
    let h = board.add_footprint(soic8());
    board.footprint_mut(h).unwrap().set_reference("U7");

    let fp = board.remove_footprint(h).unwrap();
    assert!(fp.parent().is_none());
    assert_eq!(board.footprint_count(), 0);

    let mut library = MemoryLibrary::new("Scratch");
    library.save(&fp).unwrap();
    let reloaded = library.load(fp.lib_ref()).unwrap();
    assert_eq!(reloaded.reference(), "U7");
    assert_eq!(reloaded.pad_count(), 8);
    assert_eq!(reloaded.models().len(), 1);
    assert_eq!(reloaded.bounding_box(), fp.bounding_box());
}
