use std::io::Cursor;

use criterion::{criterion_group, criterion_main, Criterion};

use nc3::{DataSet, DataType, FileReader, FileWriter};

const NUM_RECORDS: usize = 64;
const GRID_WIDTH: usize = 90;
const GRID_HEIGHT: usize = 45;

fn sample_data_set() -> DataSet {
    let mut data_set = DataSet::new();
    let time = data_set.add_dim("time", 0, 1).unwrap();
    let latitude = data_set.add_dim("latitude", GRID_HEIGHT, 1).unwrap();
    let longitude = data_set.add_dim("longitude", GRID_WIDTH, 1).unwrap();
    data_set.set_num_records(NUM_RECORDS);

    data_set.add_global_attr_string("title", "write/read benchmark").unwrap();

    data_set.add_var("latitude", DataType::Float).unwrap();
    data_set.redim_var("latitude", &[latitude.clone()]).unwrap();
    data_set
        .set_var_data_float("latitude", (0..GRID_HEIGHT).map(|i| i as f32).collect())
        .unwrap();

    data_set.add_var("temperature", DataType::Float).unwrap();
    data_set.redim_var("temperature", &[time, latitude, longitude]).unwrap();
    let num_elements: usize = NUM_RECORDS * GRID_HEIGHT * GRID_WIDTH;
    data_set
        .set_var_data_float("temperature", (0..num_elements).map(|i| (i % 100) as f32).collect())
        .unwrap();

    data_set
}

fn write_to_vec(data_set: &DataSet) -> Vec<u8> {
    let mut writer: FileWriter<Vec<u8>> = FileWriter::new(Vec::new());
    writer.write_data_set(data_set, 0).unwrap();
    writer.into_inner()
}

fn criterion_benchmark(c: &mut Criterion) {
    let data_set: DataSet = sample_data_set();
    c.bench_function("write_data_set", |b| b.iter(|| write_to_vec(&data_set)));

    let bytes: Vec<u8> = write_to_vec(&data_set);
    c.bench_function("read_data_set", |b| {
        b.iter(|| {
            let reader = FileReader::open_seek_read("bench.nc", Box::new(Cursor::new(bytes.clone()))).unwrap();
            reader.read_data_set().unwrap()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
