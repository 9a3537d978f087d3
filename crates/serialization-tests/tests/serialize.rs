use olap_axis::Axis;

use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct CellSetAxis
{
    axis: Axis,
    positions: u32,
}

#[test]
fn serial_axis_json()
{
    for axis in Axis::iter() {
        let serial = serde_json::to_string(&axis).unwrap();
        println!("Serde encode {:?} => {:?}", axis, serial);
        assert_eq!(serial, format!("\"{}\"", axis.name()));
        let res = serde_json::from_str::<Axis>(&serial);
        println!("{:?}", res);
        assert_eq!(axis, res.unwrap());
    }

    {
        let a = CellSetAxis { axis: Axis::Rows, positions: 12 };
        let serial = serde_json::to_string(&a).unwrap();
        assert_eq!(serial, r#"{"axis":"ROWS","positions":12}"#);
        let res = serde_json::from_str::<CellSetAxis>(&serial);
        assert_eq!(a, res.unwrap());
    }
}

#[test]
fn deserialize_axis_json_ordinal()
{
    assert_eq!(serde_json::from_str::<Axis>("0").unwrap(), Axis::Columns);
    assert_eq!(serde_json::from_str::<Axis>("-1").unwrap(), Axis::Slicer);
    assert_eq!(serde_json::from_str::<Axis>("4").unwrap(), Axis::Sections);
    assert_eq!(serde_json::from_str::<Axis>(r#""pages""#).unwrap(), Axis::Pages);

    let text = r#"{"axis":1,"positions":3}"#;
    let res = serde_json::from_str::<CellSetAxis>(text).unwrap();
    assert_eq!(res.axis, Axis::Rows);
}

#[test]
fn deserialize_axis_json_errors()
{
    let err = serde_json::from_str::<Axis>("5").unwrap_err();
    println!("{}", err);
    assert!(err.to_string().contains("axis ordinal 5 out of range"));

    assert!(serde_json::from_str::<Axis>("-3").is_err());

    let err = serde_json::from_str::<Axis>("4294967296").unwrap_err();
    assert!(err
        .to_string()
        .contains("axis ordinal 4294967296 out of range -2..=4"));

    let err = serde_json::from_str::<Axis>("-9223372036854775808").unwrap_err();
    assert!(err
        .to_string()
        .contains("axis ordinal -9223372036854775808 out of range"));

    let err = serde_json::from_str::<Axis>(r#""ROW""#).unwrap_err();
    println!("{}", err);
    assert!(err.to_string().contains("unknown axis name"));

    assert!(serde_json::from_str::<Axis>("1.5").is_err());
    assert!(serde_json::from_str::<Axis>("null").is_err());
}

#[test]
fn serial_axis_ron()
{
    let a = CellSetAxis { axis: Axis::Chapters, positions: 2 };
    let serial = ron::ser::to_string(&a).unwrap();
    println!("RON encode {:?} => {:?}", a, serial);
    let res = ron::de::from_str::<CellSetAxis>(&serial);
    println!("{:?}", res);
    assert_eq!(a, res.unwrap());
}

#[test]
fn serial_axis_rmp()
{
    for axis in Axis::iter() {
        let buf = rmp_serde::to_vec(&axis).unwrap();
        let res = rmp_serde::from_slice::<Axis>(&buf);
        println!("{:?}", res);
        assert_eq!(axis, res.unwrap());
    }
}

#[test]
fn store_axis_bincode()
{
    for axis in Axis::iter() {
        let store_bytes = bincode::serde::encode_to_vec(axis, bincode::config::standard()).unwrap();
        println!("Bincode encode {:?} => {:?}", axis, store_bytes);
        let res = bincode::serde::decode_from_slice::<Axis, _>(&store_bytes, bincode::config::standard());
        println!("{:?}", res);
        assert_eq!(axis, res.unwrap().0);
    }

    {
        let a = CellSetAxis { axis: Axis::Slicer, positions: 1 };
        let store_bytes = bincode::serde::encode_to_vec(&a, bincode::config::standard()).unwrap();
        let res = bincode::serde::decode_from_slice::<CellSetAxis, _>(&store_bytes, bincode::config::standard());
        assert_eq!(a, res.unwrap().0);
    }

    {
        let store_bytes = bincode::serde::encode_to_vec("ROW", bincode::config::standard()).unwrap();
        let err = bincode::serde::decode_from_slice::<Axis, _>(&store_bytes, bincode::config::standard())
            .unwrap_err();
        println!("{}", err);
        assert!(err.to_string().contains("unknown axis name"));
    }
}
