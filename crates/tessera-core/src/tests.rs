#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_unit_parse() {
        assert_eq!("12".parse::<Unit>(), Ok(Unit::Points(12.0)));
        assert_eq!(" 7.5pt ".parse::<Unit>(), Ok(Unit::Points(7.5)));
        assert_eq!("50%".parse::<Unit>(), Ok(Unit::Percent(50.0)));
        assert_eq!("".parse::<Unit>(), Err(ParseUnitError::Empty));
        assert_eq!(
            "abc%".parse::<Unit>(),
            Err(ParseUnitError::InvalidNumber("abc%".into()))
        );
        assert_eq!(
            "inf".parse::<Unit>(),
            Err(ParseUnitError::NotFinite("inf".into()))
        );
    }

    #[test]
    fn test_dimension_and_basis_parse() {
        assert_eq!("match_parent".parse::<Dimension>(), Ok(Dimension::MatchParent));
        assert_eq!("wrap_content".parse::<Dimension>(), Ok(Dimension::WrapContent));
        assert_eq!("25%".parse::<Dimension>(), Ok(Dimension::Unit(Unit::Percent(25.0))));
        assert_eq!("auto".parse::<FlexBasis>(), Ok(FlexBasis::Auto));
        assert_eq!("40".parse::<FlexBasis>(), Ok(FlexBasis::Unit(Unit::Points(40.0))));
    }

    #[test]
    fn test_unit_display_roundtrips_text_form() {
        assert_eq!(Unit::Percent(50.0).to_string(), "50%");
        assert_eq!(Unit::Points(12.5).to_string(), "12.5");
        assert_eq!(Dimension::WrapContent.to_string(), "wrap_content");
        assert_eq!(FlexBasis::Auto.to_string(), "auto");
    }

    #[test]
    fn test_unit_resolve() {
        assert_eq!(Unit::Points(10.0).resolve(None), Some(10.0));
        assert_eq!(Unit::Percent(10.0).resolve(Some(200.0)), Some(20.0));
        assert_eq!(Unit::Percent(10.0).resolve(None), None);
        assert_eq!(Unit::Percent(10.0).resolve_or_zero(None), 0.0);
    }

    #[test]
    fn test_optional_size_inset_never_negative() {
        let s = OptionalSize::new(Some(10.0), None).inset(&Edges::all(8.0));
        assert_eq!(s, OptionalSize::new(Some(0.0), None));
        let s = OptionalSize::known(100.0, 50.0).outset(&Edges::symmetric(5.0, 10.0));
        assert_eq!(s, OptionalSize::known(120.0, 60.0));
    }

    #[test]
    fn test_layout_type_from_view_type() {
        assert_eq!(ViewType::View.layout_type(), LayoutType::Block);
        assert_eq!(ViewType::AbsoluteLayout.layout_type(), LayoutType::Absolute);
        let flex = ViewType::FlexLayout(
            FlexProperties::column().justify_content(ContentJustification::Center),
        );
        assert_eq!(
            flex.layout_type(),
            LayoutType::Flex {
                direction: FlexDirection::Column,
                align_items: ItemAlignment::Stretch,
                justify_content: ContentJustification::Center,
            }
        );
    }

    #[test]
    fn test_layout_properties_defaults() {
        let l = LayoutProperties::default();
        assert_eq!(l.flex_grow, 0.0);
        assert_eq!(l.flex_shrink, 1.0);
        assert_eq!(l.flex_basis, FlexBasis::Auto);
        assert_eq!(l.margins, Edges::all(Unit::Points(0.0)));
        assert_eq!(l.transform.origin.x, Unit::Percent(50.0));
    }

    #[test]
    fn test_stroke_width() {
        assert_eq!(StyleProperties::new().stroke_width(), 0.0);
        assert_eq!(StyleProperties::new().stroke(2.0, Color::BLACK).stroke_width(), 2.0);
        assert_eq!(StyleProperties::new().stroke(-1.0, Color::BLACK).stroke_width(), 0.0);
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));

        assert_eq!(Color::from_hex("#12"), Color::BLACK);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect {
            x: 10.0,
            y: 10.0,
            w: 100.0,
            h: 50.0,
        };

        assert!(rect.contains(Point { x: 50.0, y: 30.0 }));
        assert!(!rect.contains(Point { x: 5.0, y: 30.0 }));
        assert!(!rect.contains(Point { x: 50.0, y: 70.0 }));
    }

    #[test]
    fn test_transform_about_origin() {
        let t = Transform {
            scale_x: 2.0,
            scale_y: 2.0,
            origin: Point::new(10.0, 10.0),
            ..Transform::identity()
        };
        // The origin is a fixed point of scale and rotation.
        assert_eq!(t.apply_to_point(Point::new(10.0, 10.0)), Point::new(10.0, 10.0));
        assert_eq!(t.apply_to_point(Point::new(20.0, 10.0)), Point::new(30.0, 10.0));

        let moved = Transform::translate(5.0, -5.0);
        assert_eq!(moved.apply_to_point(Point::ZERO), Point::new(5.0, -5.0));
        assert!(Transform::identity().is_identity());
        assert!(!moved.is_identity());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_decode_document() {
        let doc: ViewProperties = serde_json::from_str(
            r#"{
                "id": "root",
                "view": { "type": "flex_layout", "direction": "column", "justify_content": "space_between" },
                "layout": {
                    "size": { "width": "match_parent", "height": 200 },
                    "padding": { "top": "10%", "left": 4 },
                    "flex_basis": "auto"
                },
                "children": [
                    { "view": { "type": "text", "text": "hi", "font_size": 12 } }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(doc.id.as_deref(), Some("root"));
        assert_eq!(doc.layout.size.width, Some(Dimension::MatchParent));
        assert_eq!(
            doc.layout.size.height,
            Some(Dimension::Unit(Unit::Points(200.0)))
        );
        assert_eq!(doc.layout.padding.top, Unit::Percent(10.0));
        assert_eq!(doc.layout.padding.right, Unit::Points(0.0));
        assert_eq!(doc.layout.flex_shrink, 1.0);
        assert!(matches!(doc.children[0].view_type, ViewType::Text { .. }));
        assert_eq!(
            doc.layout_type(),
            LayoutType::Flex {
                direction: FlexDirection::Column,
                align_items: ItemAlignment::Stretch,
                justify_content: ContentJustification::SpaceBetween,
            }
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_decode_rejects_bad_unit() {
        let err = serde_json::from_str::<LayoutProperties>(r#"{ "margins": { "top": "12px" } }"#);
        assert!(err.is_err());
    }
}
