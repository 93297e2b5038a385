use growpack::{Item, Packer};

fn main() {
    env_logger::init();

    let inputs: Vec<_> = (0..5).map(|_| Item::new((30.0, 30.0))).collect();

    let mut packer = Packer::new(inputs).spacing(2.0);
    let bin = packer.pack().expect("uniform items should always pack");

    println!("Bin size: {:?}", bin);
    println!("Placements: {:#?}", packer.placements());
}
