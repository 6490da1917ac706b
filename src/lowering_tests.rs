//! Statement-level lowering tests.
//!
//! Each test lowers a small document end to end and compares the generated
//! method body line by line.

#[cfg(test)]
mod tests {
    use crate::context::Context;
    use crate::document::FxmlCompiler;
    use crate::fxml::{Element, ElementData, InstanceDeclarationElement};
    use crate::generate::{Generator, Parent};
    use crate::handler::MethodReferenceHandler;
    use crate::java::Expression;
    use crate::model::Hierarchy;
    use crate::options::LowerOptions;

    const CONTROLLER: &str = "com.example.Main";

    fn lower_with(compiler: &FxmlCompiler, source: &str) -> Vec<String> {
        let mut hierarchy = Hierarchy::new();
        hierarchy.declare(CONTROLLER);
        let method = compiler
            .compile_source("Main", source, &mut hierarchy)
            .unwrap();
        method.body.iter().map(ToString::to_string).collect()
    }

    fn lower(source: &str) -> Vec<String> {
        lower_with(&FxmlCompiler::default(), source)
    }

    // ═══════════════════════════════════════════════════════════════════════════════
    // ROOT AND DECLARATIONS
    // ═══════════════════════════════════════════════════════════════════════════════

    #[test]
    fn test_root_without_attributes() {
        assert_eq!(
            lower(r#"<Pane fx:controller="com.example.Main"/>"#),
            vec![
                "Pane pane = new Pane();",
                "initialize(null, bundle);",
                "return pane;",
            ]
        );
    }

    #[test]
    fn test_fx_id_is_assigned_not_declared() {
        assert_eq!(
            lower(
                r##"<VBox fx:controller="com.example.Main" spacing="10">
                    <children>
                        <Button fx:id="ok" text="OK" onAction="#save"/>
                        <Label text="%title"/>
                    </children>
                </VBox>"##
            ),
            vec![
                "VBox vBox = new VBox();",
                "vBox.setSpacing(10);",
                "ok = new Button();",
                "ok.setText(\"OK\");",
                "ok.setOnAction(this::save);",
                "vBox.getChildren().add(ok);",
                "Label label = new Label();",
                "label.setText(bundle.getString(\"title\"));",
                "vBox.getChildren().add(label);",
                "initialize(null, bundle);",
                "return vBox;",
            ]
        );
    }

    #[test]
    fn test_single_valued_property_uses_setter() {
        assert_eq!(
            lower(
                r#"<BorderPane fx:controller="com.example.Main">
                    <center><Label/></center>
                </BorderPane>"#
            ),
            vec![
                "BorderPane borderPane = new BorderPane();",
                "Label label = new Label();",
                "borderPane.setCenter(label);",
                "initialize(null, bundle);",
                "return borderPane;",
            ]
        );
    }

    // ═══════════════════════════════════════════════════════════════════════════════
    // SPECIAL TYPES
    // ═══════════════════════════════════════════════════════════════════════════════

    #[test]
    fn test_static_property_and_insets() {
        assert_eq!(
            lower(
                r#"<GridPane fx:controller="com.example.Main">
                    <children>
                        <Label fx:id="cell" text="Name" GridPane.columnIndex="2">
                            <GridPane.margin>
                                <Insets top="5.0"/>
                            </GridPane.margin>
                        </Label>
                    </children>
                </GridPane>"#
            ),
            vec![
                "GridPane gridPane = new GridPane();",
                "cell = new Label();",
                "cell.setText(\"Name\");",
                "GridPane.setColumnIndex(cell, 2);",
                "Insets insets = new Insets(5.0, 0.0, 0.0, 0.0);",
                "GridPane.setMargin(cell, insets);",
                "gridPane.getChildren().add(cell);",
                "initialize(null, bundle);",
                "return gridPane;",
            ]
        );
    }

    #[test]
    fn test_insets_argument_order() {
        let body = lower(
            r#"<VBox fx:controller="com.example.Main">
                <padding><Insets left="4.0" bottom="3.0" right="2.0" top="1.0"/></padding>
            </VBox>"#,
        );
        assert_eq!(body[1], "Insets insets = new Insets(1.0, 2.0, 3.0, 4.0);");
        assert_eq!(body[2], "vBox.setPadding(insets);");
    }

    #[test]
    fn test_image_consumes_url() {
        assert_eq!(
            lower(
                r#"<ImageView fx:controller="com.example.Main" fitWidth="32">
                    <image><Image url="@icons/logo.png"/></image>
                </ImageView>"#
            ),
            vec![
                "ImageView imageView = new ImageView();",
                "imageView.setFitWidth(32);",
                "Image image = new Image(getClass().getResource(\"/com/example/icons/logo.png\").openStream());",
                "imageView.setImage(image);",
                "initialize(null, bundle);",
                "return imageView;",
            ]
        );
    }

    #[test]
    fn test_style_class_and_size_hints() {
        let body = lower(
            r#"<Button fx:controller="com.example.Main" styleClass="primary"
                prefWidth="-Infinity" maxWidth="-1.0" alignment="CENTER_LEFT"/>"#,
        );
        assert_eq!(
            body[1..4],
            [
                "button.getStyleClass().add(\"primary\");",
                "button.setPrefWidth(javafx.scene.control.Control.USE_PREF_SIZE);",
                "button.setMaxWidth(javafx.scene.control.Control.USE_COMPUTED_SIZE);",
            ]
        );
        assert_eq!(body[4], "button.setAlignment(javafx.geometry.Pos.CENTER_LEFT);");
    }

    // ═══════════════════════════════════════════════════════════════════════════════
    // CONFIGURATION
    // ═══════════════════════════════════════════════════════════════════════════════

    #[test]
    fn test_custom_handler_builder() {
        let compiler = FxmlCompiler::default().with_handler(|name: &str| {
            Expression::call(Expression::name("handlers"), "get", vec![Expression::string(name)])
        });
        let body = lower_with(
            &compiler,
            r##"<Button fx:controller="com.example.Main" onAction="#save"/>"##,
        );
        assert_eq!(body[1], "button.setOnAction(handlers.get(\"save\"));");
    }

    #[test]
    fn test_configured_names() {
        let compiler = FxmlCompiler::new(LowerOptions {
            initialize_hook: "init".to_string(),
            bundle: "resources".to_string(),
            ..LowerOptions::default()
        });
        let body = lower_with(
            &compiler,
            r#"<Label fx:controller="com.example.Main" text="%title"/>"#,
        );
        assert_eq!(
            body,
            vec![
                "Label label = new Label();",
                "label.setText(resources.getString(\"title\"));",
                "init(null, resources);",
                "return label;",
            ]
        );
    }

    // ═══════════════════════════════════════════════════════════════════════════════
    // PASS-THROUGH ELEMENTS
    // ═══════════════════════════════════════════════════════════════════════════════

    #[test]
    fn test_pass_through_elements_emit_nothing() {
        let body = lower(
            r#"<VBox fx:controller="com.example.Main">
                <fx:define><Label fx:id="hidden"/></fx:define>
                <fx:script>init()</fx:script>
            </VBox>"#,
        );
        assert_eq!(
            body,
            vec![
                "VBox vBox = new VBox();",
                "initialize(null, bundle);",
                "return vBox;",
            ]
        );
    }

    #[test]
    fn test_pass_through_propagates_include_errors() {
        let mut hierarchy = Hierarchy::new();
        hierarchy.declare(CONTROLLER);
        let err = FxmlCompiler::default()
            .compile_source(
                "Main",
                r#"<VBox fx:controller="com.example.Main">
                    <fx:define><fx:include source="Missing.fxml"/></fx:define>
                </VBox>"#,
                &mut hierarchy,
            )
            .unwrap_err();
        assert!(err.to_string().contains("Missing.fxml"));
    }

    #[test]
    fn test_generator_returns_none_for_define() {
        let ctx = Context::new();
        let options = LowerOptions::default();
        let handler = MethodReferenceHandler;
        let generator = Generator::new(&ctx, &options, &handler);

        let define = Element::Define(ElementData::new("define"));
        assert_eq!(generator.lower_element(&define, Parent::Element("root")).unwrap(), None);

        let mut label = InstanceDeclarationElement::new("Label");
        label.data.identifier = Some("label".to_string());
        let statements = generator
            .lower_element(&Element::InstanceDeclaration(label), Parent::Element("root"))
            .unwrap()
            .unwrap();
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].to_string(), "Label label = new Label();");
    }

    #[test]
    fn test_lowering_is_deterministic() {
        let source = r#"<VBox fx:controller="com.example.Main">
            <children><Button/><Button/><Label fx:id="button2"/></children>
        </VBox>"#;
        let first = lower(source);
        assert_eq!(first, lower(source));
        assert_eq!(first[1], "Button button = new Button();");
        assert_eq!(first[3], "Button button1 = new Button();");
        assert_eq!(first[5], "button2 = new Label();");
    }
}
