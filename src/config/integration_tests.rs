#[cfg(test)]
mod integration_tests {
    use crate::config::{collect_warnings, load_and_validate_task};
    use crate::errors::{LoadError, ValidationError};
    use crate::model::{ScalarType, ValueType};
    use crate::render_driver_header;

    /// Test that YAML task descriptors load in declaration order
    #[test]
    fn test_sum_pairs_yaml_loading() {
        let task = load_and_validate_task("tasks/sum_pairs.yaml").unwrap();

        assert_eq!(task.name, "sum_pairs");
        assert_eq!(task.interfaces.len(), 2);
        assert_eq!(task.interfaces[0].name, "solution");
        assert_eq!(task.interfaces[1].name, "helper");

        let solution = task.interface("solution").unwrap();
        assert_eq!(solution.functions.len(), 2);
        assert_eq!(solution.functions[0].name, "init");
        assert_eq!(solution.functions[1].name, "query");
        assert_eq!(solution.functions[1].returns, Some(ScalarType::Int64));
        assert_eq!(
            solution.functions[0].parameters[1].ty,
            ValueType::array(ScalarType::Int, 1)
        );
        assert_eq!(solution.callback_functions[0].name, "report_progress");

        assert_eq!(task.driver.functions.len(), 1);
        assert!(collect_warnings(&task).is_empty());
    }

    /// Test TOML task descriptors
    #[test]
    fn test_graph_toml_loading() {
        let task = load_and_validate_task("tasks/graph.toml").unwrap();

        assert_eq!(task.name, "graph");
        assert_eq!(task.interfaces.len(), 1);
        assert_eq!(
            task.interfaces[0].functions[0].parameters[1].ty,
            ValueType::array(ScalarType::Int, 2)
        );
        assert_eq!(task.driver.functions[0].name, "check_path");
    }

    /// Test rendering a loaded task end to end with the C++ backend
    #[test]
    fn test_sum_pairs_driver_header() {
        let task = load_and_validate_task("tasks/sum_pairs.yaml").unwrap();

        let header = render_driver_header(&task).unwrap();

        let expected = "\
#include \"support_proto.h\"

// protocol: interface solution (driver)
namespace solution {
    // functions
    extern void init(int n, int *values);
    extern int64_t query(int left, int right);
    // callbacks
    void report_progress(int done);
} // namespace solution

// protocol: interface helper (driver)
namespace helper {
    // callbacks
    bool is_prime(int64_t x);
} // namespace helper

// protocol: driver
// callbacks
int evaluate();
";
        assert_eq!(header, expected);
    }

    /// Test that a task with no interfaces and no driver functions still renders the driver block
    #[test]
    fn test_driver_only_task() {
        let task = load_and_validate_task("tasks/driver_only.yaml").unwrap();

        let header = render_driver_header(&task).unwrap();

        assert_eq!(header, "#include \"support_proto.h\"\n\n// protocol: driver\n");
    }

    /// Test that every validation problem in a descriptor is reported together
    #[test]
    fn test_invalid_task_reports_all_errors() {
        let result = load_and_validate_task("tasks/invalid.yaml");

        match result {
            Err(LoadError::Validation(errors)) => {
                assert_eq!(
                    errors,
                    vec![
                        ValidationError::DuplicateInterface {
                            name: "solution".to_string(),
                        },
                        ValidationError::DuplicateFunction {
                            scope: "solution".to_string(),
                            name: "solve".to_string(),
                        },
                        ValidationError::DuplicateParameter {
                            function: "solve".to_string(),
                            name: "x".to_string(),
                        },
                    ]
                );
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
    }
}
