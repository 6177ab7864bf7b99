use crate::models::OrfRecord;

pub const SOURCE: &str = "ribotish";
pub const FEATURE: &str = "CDS";

/// One GFF line (with trailing newline) for `record` at table position `index`.
///
/// The transcript id is `ribotish<index>` with no separator, which is what
/// downstream tooling already keys on.
pub fn orf_gff_line(index: usize, record: &OrfRecord) -> String {
    format!(
        "{chrom}\t{SOURCE}\t{FEATURE}\t{start}\t{stop}\t.\t{strand}\t.\t\
         transcript_id {SOURCE}{index};start_codon {start_codon};tis_type {tis_type};\
         tis_pvalue {tis_pvalue};ribo_pvalue {ribo_pvalue};fisher_pvalue {fisher_pvalue}\n",
        chrom = record.pos.chromosome,
        start = record.pos.start,
        stop = record.pos.stop,
        strand = record.pos.strand,
        start_codon = record.start_codon,
        tis_type = record.tis_type,
        tis_pvalue = record.tis_pvalue,
        ribo_pvalue = record.ribo_pvalue,
        fisher_pvalue = record.fisher_pvalue,
    )
}

/// Serializes indexed ORFs into the GFF3 body, one line per ORF.
pub fn make_orfs_gff3<'a, I>(rows: I) -> String
where
    I: IntoIterator<Item = (usize, &'a OrfRecord)>,
{
    rows.into_iter().fold(String::new(), |mut out, (index, record)| {
        out.push_str(&orf_gff_line(index, record));
        out
    })
}
