use log::{debug, info};
use person_wire_bench::{
    Fixtures, JsonFormat, PersonData, PersonProto, ProtobufFormat, RoundTripReport,
    measure_roundtrip,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let fixtures = Fixtures::standard();
    debug!(
        "Fixtures ready: {} phone numbers, {} addresses",
        fixtures.shape.phone_numbers, fixtures.shape.addresses
    );

    benchmark_json(&fixtures.data)?;
    benchmark_protobuf(&fixtures.person)?;

    Ok(())
}

fn benchmark_json(data: &PersonData) -> anyhow::Result<()> {
    info!("Running JSON round-trip");
    let report = measure_roundtrip::<PersonData, JsonFormat>(data)?;
    print_report(&report);
    Ok(())
}

fn benchmark_protobuf(person: &PersonProto) -> anyhow::Result<()> {
    info!("Running Protobuf round-trip");
    let report = measure_roundtrip::<PersonProto, ProtobufFormat>(person)?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &RoundTripReport) {
    println!("{report}");
}
