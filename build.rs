fn main() {
    // Embed Windows version info into the diagnostic executable
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set("ProductName", "display-interop");
        res.set("FileDescription", "Windows display configuration inspector");
        res.set("CompanyName", "display-interop Contributors");
        res.set("LegalCopyright", "Copyright © 2024 display-interop Contributors");
        res.set("OriginalFilename", "display-interop.exe");
        res.set("FileVersion", env!("CARGO_PKG_VERSION"));
        res.set("ProductVersion", env!("CARGO_PKG_VERSION"));
        res.compile().unwrap();
    }
}
