fn main() {
    let template = tempfile::TempDir::new().unwrap();
    let workdir = tempfile::TempDir::new().unwrap();
    let dest = tempfile::TempDir::new().unwrap();
    let archive_path = modkit::generate::generate_archive(template.path(), workdir.path()).unwrap();
    let mut archive = zip::ZipArchive::new(std::fs::File::open(&archive_path).unwrap()).unwrap();
    for i in 0..archive.len() {
        println!("entry {}: {:?}", i, archive.by_index(i).unwrap().name());
    }
    let ids = modkit::identifiers::Identifiers::validated(
        "com.acme.mymod".into(), "mymod".into(), "MyMod".into(), "My Mod".into(), "d".into()).unwrap();
    let r = modkit::extract::extract_archive(&archive_path, dest.path(), &ids);
    println!("{:?}", r);
}
