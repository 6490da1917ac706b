//! Scan pass tests: identifier assignment and include registration.

#[cfg(test)]
mod tests {
    use crate::context::Context;
    use crate::fxml::{Element, Fxml, Project};
    use crate::java::ClassType;
    use crate::parse::parse_fxml;
    use crate::scan::{scan_fxml, scan_project};

    fn scanned(name: &str, source: &str) -> Fxml {
        let mut fxml = parse_fxml(name, source).unwrap();
        scan_fxml(&mut fxml, &mut Context::new());
        fxml
    }

    /// Identifiers in pre-order, paired with the element name.
    fn identifiers(fxml: &Fxml) -> Vec<(String, String)> {
        fn collect(element: &Element, out: &mut Vec<(String, String)>) {
            out.push((
                element.name().to_string(),
                element.identifier().unwrap_or_default().to_string(),
            ));
            for child in &element.data().elements {
                collect(child, out);
            }
        }
        let mut out = Vec::new();
        if let Some(root) = &fxml.root {
            collect(root, &mut out);
        }
        out
    }

    fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected
            .iter()
            .map(|(n, i)| (n.to_string(), i.to_string()))
            .collect()
    }

    #[test]
    fn test_generated_names_and_property_seeds() {
        let fxml = scanned(
            "Main",
            r#"<BorderPane fx:controller="com.example.Main">
                <center>
                    <GridPane>
                        <children>
                            <Button/>
                            <Button/>
                        </children>
                    </GridPane>
                </center>
            </BorderPane>"#,
        );
        assert_eq!(
            identifiers(&fxml),
            pairs(&[
                ("BorderPane", "borderPane"),
                ("center", "borderPaneCenter"),
                ("GridPane", "gridPane"),
                ("children", "gridPaneChildren"),
                ("Button", "button"),
                ("Button", "button1"),
            ])
        );
    }

    #[test]
    fn test_fx_id_is_reserved_before_generation() {
        let fxml = scanned(
            "Main",
            r#"<VBox fx:controller="com.example.Main">
                <children>
                    <Button/>
                    <Button fx:id="button"/>
                </children>
            </VBox>"#,
        );
        assert_eq!(
            identifiers(&fxml),
            pairs(&[
                ("VBox", "vBox"),
                ("children", "vBoxChildren"),
                ("Button", "button1"),
                ("Button", "button"),
            ])
        );
    }

    #[test]
    fn test_id_attribute_seeds_identifier() {
        let fxml = scanned(
            "Main",
            r#"<VBox fx:controller="com.example.Main">
                <Label id="Title"/>
            </VBox>"#,
        );
        assert_eq!(identifiers(&fxml)[1], ("Label".to_string(), "title".to_string()));
    }

    #[test]
    fn test_existing_identifier_is_kept() {
        let mut fxml = parse_fxml("Main", r#"<VBox fx:controller="a.Main"/>"#).unwrap();
        if let Some(root) = fxml.root.as_mut() {
            root.data_mut().identifier = Some("content".to_string());
        }
        let mut ctx = Context::new();
        scan_fxml(&mut fxml, &mut ctx);
        scan_fxml(&mut fxml, &mut ctx);
        assert_eq!(identifiers(&fxml), pairs(&[("VBox", "content")]));
    }

    #[test]
    fn test_names_restart_per_document() {
        let mut project = Project::new(vec![
            parse_fxml("A", r#"<VBox fx:controller="x.A"/>"#).unwrap(),
            parse_fxml("B", r#"<VBox fx:controller="x.B"/>"#).unwrap(),
        ]);
        scan_project(&mut project, &mut Context::new());
        assert_eq!(identifiers(&project.fxmls[0]), pairs(&[("VBox", "vBox")]));
        assert_eq!(identifiers(&project.fxmls[1]), pairs(&[("VBox", "vBox")]));
    }

    #[test]
    fn test_registers_include_targets() {
        let mut project = Project::new(vec![
            parse_fxml("Main", r#"<VBox fx:controller="com.example.Main"/>"#).unwrap(),
            parse_fxml("Orphan", r#"<HBox/>"#).unwrap(),
        ]);
        let mut ctx = Context::new();
        scan_project(&mut project, &mut ctx);

        assert_eq!(ctx.controller("Main.fxml"), Some("com.example.Main"));
        assert_eq!(ctx.factory("Main.fxml"), Some(&ClassType::new("VBox")));
        assert_eq!(ctx.controller("Orphan.fxml"), None);
        assert_eq!(ctx.factory("Orphan.fxml"), Some(&ClassType::new("HBox")));
    }

    #[test]
    fn test_include_gets_identifier() {
        let fxml = scanned(
            "Main",
            r#"<VBox fx:controller="com.example.Main">
                <fx:include source="Child.fxml"/>
                <fx:include fx:id="footer" source="Footer.fxml"/>
            </VBox>"#,
        );
        assert_eq!(
            identifiers(&fxml),
            pairs(&[("VBox", "vBox"), ("include", "include"), ("include", "footer")])
        );
    }
}
