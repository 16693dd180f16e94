use crate::{
    column::{Column, ColumnDefault},
    error::ErrorKind,
    expr::{Expression, FieldPath, Literal},
    partition::{IdentityPartition, ListPartition, Partition, Properties, RangePartition},
    transform::Transform,
    types::DataType,
    wire::{
        ExpressionDto, LiteralDto, PartitionDto, PartitioningDto, column_from_wire,
        column_to_wire, expression_from_wire, expression_to_wire, literal_from_wire,
        literal_to_wire, partition_from_wire, partition_to_wire, transform_from_wire,
        transform_to_wire,
    },
};
use proptest::prelude::*;
use serde_json::json;

// ---- helpers -----------------------------------------------------------

fn path(segments: &[&str]) -> FieldPath {
    FieldPath::new(segments.iter().map(ToString::to_string).collect()).unwrap()
}

fn identity_partition() -> IdentityPartition {
    IdentityPartition::new(
        "year=2024/month=11",
        vec![FieldPath::field("year"), FieldPath::field("month")],
        vec![Literal::integer(2024), Literal::string("11")],
        Properties::from([("location".to_string(), "s3://bucket/p".to_string())]),
    )
    .unwrap()
}

fn expr_round_trip(expression: &Expression) {
    let dto = expression_to_wire(expression);
    let back = expression_from_wire(&dto).unwrap();
    assert_eq!(&back, expression);
}

fn transform_round_trip(transform: &Transform) {
    let dto = transform_to_wire(transform);
    let back = transform_from_wire(&dto).unwrap();
    assert_eq!(&back, transform);
}

fn partition_round_trip(partition: &Partition) {
    let dto = partition_to_wire(partition);
    let back = partition_from_wire(&dto).unwrap();
    assert_eq!(&back, partition);
}

// ---- literals ----------------------------------------------------------

#[test]
fn null_literal_maps_to_the_distinguished_dto() {
    assert_eq!(literal_to_wire(&Literal::Null), LiteralDto::NULL);
}

#[test]
fn absent_value_and_null_type_both_decode_to_the_null_singleton() {
    let absent = LiteralDto {
        value: None,
        data_type: DataType::String,
    };
    let null_typed = LiteralDto {
        value: Some("ignored".to_string()),
        data_type: DataType::Null,
    };

    assert_eq!(literal_from_wire(&absent), Literal::Null);
    assert_eq!(literal_from_wire(&null_typed), Literal::Null);
}

#[test]
fn typed_literal_keeps_its_stringified_value() {
    let dto = literal_to_wire(&Literal::integer(42));
    assert_eq!(dto.value.as_deref(), Some("42"));
    assert_eq!(dto.data_type, DataType::Integer);
}

// ---- expressions -------------------------------------------------------

#[test]
fn expression_round_trips_every_variant() {
    expr_round_trip(&Expression::null());
    expr_round_trip(&Expression::literal("3.5", DataType::Decimal));
    expr_round_trip(&Expression::field("dt"));
    expr_round_trip(&Expression::Field(path(&["address", "city"])));
    expr_round_trip(&Expression::unparsed("CURRENT_TIMESTAMP()"));
    expr_round_trip(&Expression::function(
        "bucket",
        vec![
            Expression::literal("16", DataType::Integer),
            Expression::field("id"),
            Expression::function("lower", vec![Expression::field("name")]),
        ],
    ));
}

#[test]
fn expression_wire_shape_uses_arg_type_discriminant() {
    let dto = expression_to_wire(&Expression::function(
        "date_trunc",
        vec![
            Expression::literal("day", DataType::String),
            Expression::field("ts"),
        ],
    ));

    let value = serde_json::to_value(&dto).unwrap();
    assert_eq!(
        value,
        json!({
            "argType": "FUNCTION",
            "functionName": "date_trunc",
            "args": [
                {"argType": "LITERAL", "value": "day", "dataType": "string"},
                {"argType": "FIELD", "fieldName": ["ts"]},
            ],
        })
    );
}

#[test]
fn null_literal_wire_form_has_null_value_and_null_type() {
    let value = serde_json::to_value(expression_to_wire(&Expression::null())).unwrap();
    assert_eq!(
        value,
        json!({"argType": "LITERAL", "value": null, "dataType": "null"})
    );
}

#[test]
fn unknown_arg_type_is_rejected_at_the_serde_layer() {
    let raw = json!({"argType": "LAMBDA", "body": "x -> x"});
    assert!(serde_json::from_value::<ExpressionDto>(raw).is_err());
}

#[test]
fn empty_field_name_fails_loudly_on_the_way_in() {
    let dto = ExpressionDto::Field { field_name: vec![] };
    let err = expression_from_wire(&dto).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

// ---- transforms --------------------------------------------------------

#[test]
fn transform_round_trips_every_variant() {
    transform_round_trip(&Transform::identity("region"));
    transform_round_trip(&Transform::Year(FieldPath::field("dt")));
    transform_round_trip(&Transform::Month(FieldPath::field("dt")));
    transform_round_trip(&Transform::Day(FieldPath::field("dt")));
    transform_round_trip(&Transform::Hour(FieldPath::field("ts")));
    transform_round_trip(&Transform::Bucket {
        num_buckets: 16,
        fields: vec![FieldPath::field("id"), path(&["user", "id"])],
    });
    transform_round_trip(&Transform::Truncate {
        width: 4,
        field: FieldPath::field("code"),
    });
    transform_round_trip(&Transform::List {
        fields: vec![FieldPath::field("a"), FieldPath::field("b")],
    });
    transform_round_trip(&Transform::Range {
        field: FieldPath::field("dt"),
    });
    transform_round_trip(&Transform::Apply {
        name: "hash_mod".into(),
        args: vec![
            Expression::field("id"),
            Expression::literal("8", DataType::Integer),
        ],
    });
}

#[test]
fn transform_wire_shape_uses_strategy_discriminant() {
    let value = serde_json::to_value(transform_to_wire(&Transform::identity("dt"))).unwrap();
    assert_eq!(value, json!({"strategy": "IDENTITY", "fieldName": ["dt"]}));

    let bucket = transform_to_wire(&Transform::Bucket {
        num_buckets: 8,
        fields: vec![FieldPath::field("id")],
    });
    assert_eq!(
        serde_json::to_value(&bucket).unwrap(),
        json!({"strategy": "BUCKET", "numBuckets": 8, "fieldNames": [["id"]]})
    );
}

#[test]
fn unknown_strategy_is_rejected_at_the_serde_layer() {
    let raw = json!({"strategy": "HASH", "fieldName": ["id"]});
    assert!(serde_json::from_value::<PartitioningDto>(raw).is_err());
}

// ---- partitions --------------------------------------------------------

#[test]
fn partition_round_trips_every_variant() {
    partition_round_trip(&Partition::Identity(identity_partition()));
    partition_round_trip(&Partition::Range(RangePartition::new(
        "p_2024",
        Literal::integer(0),
        Literal::integer(100),
        Properties::new(),
    )));
    partition_round_trip(&Partition::Range(RangePartition::new(
        "p_open",
        Literal::Null,
        Literal::integer(100),
        Properties::new(),
    )));
    partition_round_trip(&Partition::List(
        ListPartition::new(
            "p_list",
            vec![
                vec![Literal::string("emea"), Literal::integer(1)],
                vec![Literal::string("apac"), Literal::integer(2)],
            ],
            Properties::new(),
        )
        .unwrap(),
    ));
}

#[test]
fn partition_wire_shape_uses_type_discriminant() {
    let value =
        serde_json::to_value(partition_to_wire(&Partition::Identity(identity_partition())))
            .unwrap();
    assert_eq!(
        value,
        json!({
            "type": "IDENTITY",
            "name": "year=2024/month=11",
            "fieldNames": [["year"], ["month"]],
            "values": [
                {"value": "2024", "dataType": "integer"},
                {"value": "11", "dataType": "string"},
            ],
            "properties": {"location": "s3://bucket/p"},
        })
    );
}

#[test]
fn identity_partition_arity_is_rechecked_on_the_way_in() {
    let dto = PartitionDto::Identity {
        name: "broken".into(),
        field_names: vec![vec!["a".into()], vec!["b".into()]],
        values: vec![LiteralDto {
            value: Some("1".into()),
            data_type: DataType::Integer,
        }],
        properties: Properties::new(),
    };

    let err = partition_from_wire(&dto).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[test]
fn missing_properties_default_to_empty_on_decode() {
    let raw = json!({
        "type": "RANGE",
        "name": "p0",
        "upper": {"value": "10", "dataType": "integer"},
        "lower": {"value": "0", "dataType": "integer"},
    });
    let dto: PartitionDto = serde_json::from_value(raw).unwrap();
    let partition = partition_from_wire(&dto).unwrap();
    assert!(partition.properties().is_empty());
}

// ---- columns -----------------------------------------------------------

#[test]
fn column_default_three_states_survive_the_wire() {
    let unset = Column::new("id", DataType::Long).with_nullable(false);
    let null_default = Column::new("region", DataType::String).with_default(Expression::null());
    let value_default = Column::new("code", DataType::String)
        .with_comment("site code")
        .with_default(Expression::literal("none", DataType::String));

    for column in [&unset, &null_default, &value_default] {
        let back = column_from_wire(&column_to_wire(column)).unwrap();
        assert_eq!(&back, column);
    }

    assert_eq!(column_to_wire(&unset).default_value, None);
    assert_eq!(
        column_to_wire(&null_default).default_value,
        Some(ExpressionDto::Literal(LiteralDto::NULL))
    );
}

#[test]
fn column_not_set_is_absent_on_the_wire() {
    let value = serde_json::to_value(column_to_wire(&Column::new("id", DataType::Long))).unwrap();
    assert_eq!(
        value,
        json!({"name": "id", "dataType": "long", "nullable": true, "autoIncrement": false})
    );

    let back: crate::wire::ColumnDto = serde_json::from_value(value).unwrap();
    let column = column_from_wire(&back).unwrap();
    assert_eq!(column.default_value, ColumnDefault::NotSet);
}

// ---- round-trip property ----------------------------------------------

fn arb_data_type() -> impl Strategy<Value = DataType> {
    prop_oneof![
        Just(DataType::Boolean),
        Just(DataType::Date),
        Just(DataType::Decimal),
        Just(DataType::Integer),
        Just(DataType::Long),
        Just(DataType::String),
        Just(DataType::Timestamp),
    ]
}

fn arb_field_path() -> impl Strategy<Value = FieldPath> {
    prop::collection::vec("[a-z_][a-z0-9_]{0,8}", 1..3)
        .prop_map(|segments| FieldPath::new(segments).unwrap())
}

fn arb_literal() -> impl Strategy<Value = Literal> {
    prop_oneof![
        Just(Literal::Null),
        ("[a-zA-Z0-9_.-]{0,12}", arb_data_type())
            .prop_map(|(value, data_type)| Literal::new(value, data_type)),
    ]
}

fn arb_expression() -> impl Strategy<Value = Expression> {
    let leaf = prop_oneof![
        arb_literal().prop_map(Expression::Literal),
        arb_field_path().prop_map(Expression::Field),
        "[a-zA-Z0-9 ()+*-]{0,16}".prop_map(Expression::Unparsed),
    ];

    leaf.prop_recursive(2, 8, 3, |inner| {
        ("[a-z_]{1,8}", prop::collection::vec(inner, 0..3))
            .prop_map(|(name, args)| Expression::function(name, args))
    })
}

fn arb_transform() -> impl Strategy<Value = Transform> {
    prop_oneof![
        arb_field_path().prop_map(Transform::Identity),
        arb_field_path().prop_map(Transform::Year),
        arb_field_path().prop_map(Transform::Month),
        arb_field_path().prop_map(Transform::Day),
        arb_field_path().prop_map(Transform::Hour),
        (1u32..64, prop::collection::vec(arb_field_path(), 1..3))
            .prop_map(|(num_buckets, fields)| Transform::Bucket { num_buckets, fields }),
        (1u32..32, arb_field_path())
            .prop_map(|(width, field)| Transform::Truncate { width, field }),
        prop::collection::vec(arb_field_path(), 1..3)
            .prop_map(|fields| Transform::List { fields }),
        arb_field_path().prop_map(|field| Transform::Range { field }),
        ("[a-z_]{1,8}", prop::collection::vec(arb_expression(), 0..3))
            .prop_map(|(name, args)| Transform::Apply { name, args }),
    ]
}

proptest! {
    #[test]
    fn prop_expression_round_trip(expression in arb_expression()) {
        let dto = expression_to_wire(&expression);
        prop_assert_eq!(expression_from_wire(&dto).unwrap(), expression);
    }

    #[test]
    fn prop_transform_round_trip(transform in arb_transform()) {
        let dto = transform_to_wire(&transform);
        prop_assert_eq!(transform_from_wire(&dto).unwrap(), transform);
    }

    #[test]
    fn prop_expression_survives_json(expression in arb_expression()) {
        let dto = expression_to_wire(&expression);
        let text = serde_json::to_string(&dto).unwrap();
        let parsed: ExpressionDto = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(expression_from_wire(&parsed).unwrap(), expression);
    }
}
